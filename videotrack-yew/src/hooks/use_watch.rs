use yew::prelude::*;

/// Watch state accessible via hook
#[derive(Clone, Debug, PartialEq)]
pub struct WatchContext {
    pub participant_id: AttrValue,
    /// Id of the element the player is mounted on
    pub player_mount_id: AttrValue,
    /// True while playback holds navigation locked
    pub nav_locked: bool,
}

/// Hook to access the watch state
///
/// # Example
///
/// ```rust,no_run
/// use videotrack_yew::use_watch;
/// use yew::prelude::*;
///
/// #[function_component(NavState)]
/// fn nav_state() -> Html {
///     let watch = use_watch();
///
///     html! { <span>{ watch.nav_locked.to_string() }</span> }
/// }
/// ```
#[hook]
pub fn use_watch() -> WatchContext {
    use_context::<WatchContext>().expect("use_watch must be used within a WatchProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_equality() {
        let a = WatchContext {
            participant_id: AttrValue::from("p1"),
            player_mount_id: AttrValue::from("player"),
            nav_locked: false,
        };
        let b = a.clone();

        assert_eq!(a, b);
        assert_ne!(
            a,
            WatchContext {
                nav_locked: true,
                ..b
            }
        );
    }
}
