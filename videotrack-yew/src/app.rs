use crate::components::ParticipantPage;
use crate::providers::WatchProvider;
use yew::prelude::*;

/// Extract the participant id from URL query parameters
fn get_participant_id_from_url() -> Option<String> {
    if let Some(window) = web_sys::window() {
        if let Ok(href) = window.location().href() {
            if let Ok(url) = web_sys::Url::new(&href) {
                if let Some(id) = url.search_params().get("participant_id") {
                    tracing::info!("Found participant_id in URL: {}", id);
                    return Some(id);
                }
            }
        }
    }
    None
}

#[function_component(App)]
pub fn app() -> Html {
    let participant_id = use_state(|| {
        let id = get_participant_id_from_url().unwrap_or_default();
        if id.is_empty() {
            tracing::warn!("No participant_id in URL");
        }
        id
    });

    html! {
        <WatchProvider participant_id={AttrValue::from((*participant_id).clone())}>
            <ParticipantPage />
        </WatchProvider>
    }
}
