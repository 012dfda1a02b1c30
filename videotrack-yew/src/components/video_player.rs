use crate::hooks::use_watch;
use yew::prelude::*;

/// Mount element the IFrame API replaces with the player iframe
#[function_component(VideoPlayer)]
pub fn video_player() -> Html {
    let watch = use_watch();

    html! {
        <div class="video-player">
            <div id={watch.player_mount_id}></div>
        </div>
    }
}
