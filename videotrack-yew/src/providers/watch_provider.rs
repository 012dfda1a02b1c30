use crate::hooks::WatchContext;
use crate::player::{PlayerBridge, PlayerCallbacks};
use crate::services::TrackerClient;
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use videotrack_core::{PlayerState, VideoMetadata, WatchEffect, WatchReport, WatchSession};
use yew::prelude::*;

/// Fixed period of the repeating watch-time reporter
const REPORT_INTERVAL_MS: u32 = 5_000;

#[derive(Properties, PartialEq)]
pub struct WatchProviderProps {
    /// Opaque identifier of the participant viewing the page
    pub participant_id: AttrValue,
    /// Id of the element the IFrame API replaces with the player
    #[prop_or(AttrValue::Static("player"))]
    pub player_mount_id: AttrValue,
    /// Endpoint watch reports are POSTed to
    #[prop_or(AttrValue::Static("/track/"))]
    pub track_endpoint: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Browser-side resources the session's effects operate on
struct WatchRuntime {
    session: RefCell<WatchSession>,
    bridge: RefCell<Option<PlayerBridge>>,
    timer: RefCell<Option<Interval>>,
    tracker: TrackerClient,
    nav_locked: UseStateHandle<bool>,
}

fn apply_effects(runtime: &Rc<WatchRuntime>, effects: Vec<WatchEffect>) {
    for effect in effects {
        match effect {
            WatchEffect::LockNavigation => runtime.nav_locked.set(true),
            WatchEffect::UnlockNavigation => runtime.nav_locked.set(false),
            WatchEffect::ArmReportTimer => {
                let tick = {
                    let runtime = runtime.clone();
                    move || {
                        let report = runtime.session.borrow().report_due();
                        if let Some(report) = report {
                            submit_report(&runtime, report);
                        }
                    }
                };
                // Replacing the handle drops, and thereby cancels, any
                // previously armed timer.
                runtime
                    .timer
                    .borrow_mut()
                    .replace(Interval::new(REPORT_INTERVAL_MS, tick));
            }
            WatchEffect::DisarmReportTimer => {
                runtime.timer.borrow_mut().take();
            }
            WatchEffect::SubmitReport(report) => submit_report(runtime, report),
            WatchEffect::StopPlayback => {
                if let Some(bridge) = runtime.bridge.borrow().as_ref() {
                    bridge.stop_video();
                }
            }
        }
    }
}

fn submit_report(runtime: &Rc<WatchRuntime>, report: WatchReport) {
    let runtime = runtime.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match runtime.tracker.submit(&report).await {
            Ok(()) => {
                let effects = runtime.session.borrow_mut().report_succeeded();
                apply_effects(&runtime, effects);
            }
            Err(err) => {
                tracing::error!(%err, "failed to record seconds viewed");
                let effects = runtime.session.borrow_mut().report_failed();
                apply_effects(&runtime, effects);
                gloo::dialogs::alert("An error occurred.");
            }
        }
    });
}

fn on_player_ready(runtime: &Rc<WatchRuntime>) {
    let metadata = runtime
        .bridge
        .borrow()
        .as_ref()
        .and_then(|bridge| bridge.video_metadata());

    let Some((video_id, duration)) = metadata else {
        tracing::warn!("player ready without video data");
        return;
    };

    match VideoMetadata::new(video_id, duration) {
        Ok(metadata) => {
            if let Err(err) = runtime.session.borrow_mut().video_loaded(metadata) {
                tracing::warn!(%err, "ignoring ready event");
            }
        }
        Err(err) => tracing::error!(%err, "player reported unusable video data"),
    }
}

/// Owns the watch session, the player bridge, and the report timer, and
/// exposes the pieces the page renders from via [`WatchContext`]
#[function_component(WatchProvider)]
pub fn watch_provider(props: &WatchProviderProps) -> Html {
    let nav_locked = use_state(|| false);

    let runtime = {
        let participant_id = props.participant_id.clone();
        let track_endpoint = props.track_endpoint.clone();
        let nav_locked = nav_locked.clone();
        let cell = use_mut_ref(move || {
            Rc::new(WatchRuntime {
                session: RefCell::new(WatchSession::new(participant_id.as_str())),
                bridge: RefCell::new(None),
                timer: RefCell::new(None),
                tracker: TrackerClient::new(track_endpoint.as_str()),
                nav_locked,
            })
        });
        let shared = cell.borrow();
        shared.clone()
    };

    {
        let runtime = runtime.clone();
        let mount_id = props.player_mount_id.clone();
        use_effect_with((), move |_| {
            tracing::info!(
                participant_id = %runtime.session.borrow().participant_id(),
                "participant page view started"
            );

            let on_ready = {
                let runtime = runtime.clone();
                Callback::from(move |_: ()| on_player_ready(&runtime))
            };

            let on_state_change = {
                let runtime = runtime.clone();
                Callback::from(move |code: i32| {
                    let state = PlayerState::from_code(code);
                    tracing::debug!(%state, "player state changed");
                    let effects = runtime.session.borrow_mut().player_state_changed(state);
                    apply_effects(&runtime, effects);
                })
            };

            let callbacks = PlayerCallbacks {
                on_ready,
                on_state_change,
            };
            match PlayerBridge::install(mount_id.as_str(), callbacks) {
                Ok(bridge) => {
                    runtime.bridge.borrow_mut().replace(bridge);
                }
                Err(err) => tracing::error!(%err, "player bootstrap failed"),
            }

            || ()
        });
    }

    let context = WatchContext {
        participant_id: props.participant_id.clone(),
        player_mount_id: props.player_mount_id.clone(),
        nav_locked: *nav_locked,
    };

    html! {
        <ContextProvider<WatchContext> {context}>
            { props.children.clone() }
        </ContextProvider<WatchContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_defaults() {
        let props = yew::props!(WatchProviderProps {
            participant_id: AttrValue::from("p1"),
        });

        assert_eq!(props.player_mount_id.as_str(), "player");
        assert_eq!(props.track_endpoint.as_str(), "/track/");
    }
}
