use js_sys::Reflect;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;
use yew::Callback;

const IFRAME_API_SRC: &str = "https://www.youtube.com/iframe_api";

#[wasm_bindgen]
extern "C" {
    /// Handle to a `YT.Player` instance from the IFrame API
    #[wasm_bindgen(js_namespace = YT, js_name = Player)]
    pub type YtPlayer;

    #[wasm_bindgen(constructor, js_namespace = YT, js_class = "Player")]
    pub fn new(element_id: &str, options: &JsValue) -> YtPlayer;

    #[wasm_bindgen(method, js_name = getVideoData)]
    pub fn get_video_data(this: &YtPlayer) -> JsValue;

    #[wasm_bindgen(method, js_name = getDuration)]
    pub fn get_duration(this: &YtPlayer) -> f64;

    #[wasm_bindgen(method, js_name = getPlayerState)]
    pub fn get_player_state(this: &YtPlayer) -> i32;

    #[wasm_bindgen(method, js_name = stopVideo)]
    pub fn stop_video(this: &YtPlayer);
}

/// Errors that can occur while installing the bridge
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("No window available")]
    NoWindow,

    #[error("No document available")]
    NoDocument,

    #[error("Failed to install the player bridge: {0}")]
    Install(String),
}

/// Typed callbacks the page hands to the bridge at construction
///
/// These replace the loader protocol's `onPlayerReady` and
/// `onPlayerStateChange` globals; only `onYouTubeIframeAPIReady` still has
/// to live on `window`.
pub struct PlayerCallbacks {
    pub on_ready: Callback<()>,
    /// Receives the raw state code carried by the state-change event
    pub on_state_change: Callback<i32>,
}

/// Owns the player handle and the closures wired into the IFrame API
///
/// Dropping the bridge invalidates the registered callbacks, so the provider
/// keeps it alive for the whole page view.
pub struct PlayerBridge {
    player: Rc<RefCell<Option<YtPlayer>>>,
    _api_ready: Closure<dyn FnMut()>,
    _on_ready: Rc<Closure<dyn FnMut(JsValue)>>,
    _on_state_change: Rc<Closure<dyn FnMut(JsValue)>>,
}

impl PlayerBridge {
    /// Register the loader's ready hook and inject the IFrame API script
    ///
    /// The API calls `onYouTubeIframeAPIReady` once loaded; at that point
    /// the player is constructed against the mount element with the
    /// ready/state-change callbacks wired into its `events` option.
    pub fn install(mount_id: &str, callbacks: PlayerCallbacks) -> Result<Self, PlayerError> {
        let window = web_sys::window().ok_or(PlayerError::NoWindow)?;
        let document = window.document().ok_or(PlayerError::NoDocument)?;

        let player: Rc<RefCell<Option<YtPlayer>>> = Rc::new(RefCell::new(None));

        let on_ready = {
            let callback = callbacks.on_ready;
            Rc::new(Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| {
                callback.emit(());
            }))
        };

        let on_state_change = {
            let callback = callbacks.on_state_change;
            Rc::new(Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                let code = Reflect::get(&event, &JsValue::from_str("data"))
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(-1);
                callback.emit(code);
            }))
        };

        let api_ready = {
            let player = player.clone();
            let mount_id = mount_id.to_string();
            let on_ready = on_ready.clone();
            let on_state_change = on_state_change.clone();
            Closure::<dyn FnMut()>::new(move || {
                tracing::debug!("iframe api ready, constructing player");
                let options = player_options(&on_ready, &on_state_change);
                player
                    .borrow_mut()
                    .replace(YtPlayer::new(&mount_id, &options));
            })
        };

        Reflect::set(
            window.as_ref(),
            &JsValue::from_str("onYouTubeIframeAPIReady"),
            api_ready.as_ref(),
        )
        .map_err(|err| PlayerError::Install(format!("{err:?}")))?;

        inject_api_script(&document)?;

        Ok(PlayerBridge {
            player,
            _api_ready: api_ready,
            _on_ready: on_ready,
            _on_state_change: on_state_change,
        })
    }

    /// Snapshot identity and duration from the live player
    pub fn video_metadata(&self) -> Option<(String, f64)> {
        let player = self.player.borrow();
        let player = player.as_ref()?;

        let data = player.get_video_data();
        let video_id = Reflect::get(&data, &JsValue::from_str("video_id"))
            .ok()
            .and_then(|value| value.as_string())?;

        Some((video_id, player.get_duration()))
    }

    /// State the player itself reports, if it has been constructed
    pub fn player_state(&self) -> Option<i32> {
        self.player
            .borrow()
            .as_ref()
            .map(|player| player.get_player_state())
    }

    pub fn stop_video(&self) {
        if let Some(player) = self.player.borrow().as_ref() {
            player.stop_video();
        }
    }
}

fn player_options(
    on_ready: &Closure<dyn FnMut(JsValue)>,
    on_state_change: &Closure<dyn FnMut(JsValue)>,
) -> JsValue {
    let events = js_sys::Object::new();
    let _ = Reflect::set(&events, &JsValue::from_str("onReady"), on_ready.as_ref());
    let _ = Reflect::set(
        &events,
        &JsValue::from_str("onStateChange"),
        on_state_change.as_ref(),
    );

    let options = js_sys::Object::new();
    let _ = Reflect::set(&options, &JsValue::from_str("events"), &events);

    options.into()
}

/// Inject the loader script, before the first script tag when one exists
fn inject_api_script(document: &Document) -> Result<(), PlayerError> {
    let tag: web_sys::HtmlScriptElement = document
        .create_element("script")
        .map_err(|err| PlayerError::Install(format!("{err:?}")))?
        .dyn_into()
        .map_err(|_| PlayerError::Install("script element has unexpected type".into()))?;
    tag.set_src(IFRAME_API_SRC);

    let scripts = document.get_elements_by_tag_name("script");
    if let Some(first) = scripts.item(0) {
        if let Some(parent) = first.parent_node() {
            let anchor: &web_sys::Node = first.as_ref();
            parent
                .insert_before(&tag, Some(anchor))
                .map_err(|err| PlayerError::Install(format!("{err:?}")))?;
            return Ok(());
        }
    }

    let head = document.head().ok_or(PlayerError::NoDocument)?;
    head.append_child(&tag)
        .map_err(|err| PlayerError::Install(format!("{err:?}")))?;

    Ok(())
}
