use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::dom::DomError;

/// Observer threshold for `amount`, the fraction of the element that must intersect the
/// viewport. Amounts outside 0.0..=1.0 are clamped and NaN counts as 0.0.
fn threshold(amount: f64) -> f64 {
    if amount.is_nan() {
        return 0.0;
    }
    amount.clamp(0.0, 1.0)
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe(
    node: &NodeRef,
    amount: f64,
    on_visible: Callback<()>,
) -> Result<Option<(IntersectionObserver, ObserverCallback)>, DomError> {
    let Some(element) = node.cast::<Element>() else {
        return Ok(None);
    };

    let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
        let visible = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if visible {
            observer.disconnect();
            on_visible.emit(());
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold(amount)));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(&element);
    Ok(Some((observer, callback)))
}

/// Becomes `true` the first time `amount` of the node is inside the viewport and stays there.
#[hook]
pub fn use_in_view(node: NodeRef, amount: f64) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(node, amount)| {
                let on_visible = {
                    let in_view = in_view.clone();
                    Callback::from(move |_: ()| in_view.set(true))
                };
                let observer = match observe(node, *amount, on_visible) {
                    Ok(observer) => observer,
                    Err(err) => {
                        // Without an observer the section would stay hidden forever.
                        warn!("viewport observer unavailable, showing section: {}", err);
                        in_view.set(true);
                        None
                    }
                };
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            (node, amount),
        );
    }

    *in_view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_stays_within_the_observer_range() {
        assert_eq!(threshold(0.3), 0.3);
        assert_eq!(threshold(0.0), 0.0);
        assert_eq!(threshold(1.5), 1.0);
        assert_eq!(threshold(-0.2), 0.0);
        assert_eq!(threshold(f64::NAN), 0.0);
    }
}
