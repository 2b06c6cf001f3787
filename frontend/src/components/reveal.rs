use web_sys::{window, Element, Event};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

/// True when a box spanning `top..bottom` (viewport coordinates) overlaps a
/// viewport of the given height.
pub fn is_in_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    bottom > 0.0 && top < viewport_height
}

fn reveal_if_visible(node: &NodeRef, revealed: &UseStateHandle<bool>) {
    if **revealed {
        return;
    }
    let Some(element) = node.cast::<Element>() else {
        return;
    };
    let Some(viewport_height) = window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
    else {
        return;
    };

    let rect = element.get_bounding_client_rect();
    if is_in_viewport(rect.top(), rect.bottom(), viewport_height) {
        log::debug!("Revealing element at top={}", rect.top());
        revealed.set(true);
    }
}

/// Flips to `true` the first time `node` scrolls into view and stays there.
#[hook]
pub fn use_reveal_once(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);

    // Elements already on screen at mount never see a scroll event
    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                reveal_if_visible(&node, &revealed);
                || ()
            },
            (),
        );
    }

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_event_with_window("scroll", move |_: Event| {
            reveal_if_visible(&node, &revealed);
        });
    }

    {
        let revealed = revealed.clone();
        use_event_with_window("resize", move |_: Event| {
            reveal_if_visible(&node, &revealed);
        });
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_the_fold_is_hidden() {
        assert!(!is_in_viewport(900.0, 1100.0, 800.0));
    }

    #[test]
    fn scrolled_past_is_hidden() {
        assert!(!is_in_viewport(-400.0, -10.0, 800.0));
    }

    #[test]
    fn partial_overlap_counts() {
        assert!(is_in_viewport(750.0, 950.0, 800.0));
        assert!(is_in_viewport(-100.0, 20.0, 800.0));
    }

    #[test]
    fn touching_edges_do_not_count() {
        assert!(!is_in_viewport(800.0, 900.0, 800.0));
        assert!(!is_in_viewport(-50.0, 0.0, 800.0));
    }
}
