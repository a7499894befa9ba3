use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::overlay_card::OverlayCard;
use crate::config::OVERLAY_TRANSITION_MS;
use crate::hover::policy::OverlayPlacement;

/// Overlays that were replaced or cleared but are still playing their exit animation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PresenceState {
    shown: Option<&'static str>,
    exiting: Vec<(u64, OverlayPlacement)>,
}

pub enum PresenceAction {
    /// The resolved overlay changed. `ticket` labels the overlay that starts leaving.
    Show {
        placement: Option<OverlayPlacement>,
        previous: Option<OverlayPlacement>,
        ticket: u64,
    },
    Expire(u64),
}

impl PresenceState {
    pub fn exiting(&self) -> impl Iterator<Item = &OverlayPlacement> {
        self.exiting.iter().map(|(_, placement)| placement)
    }
}

impl Reducible for PresenceState {
    type Action = PresenceAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PresenceAction::Show { placement, previous, ticket } => {
                let next_id = placement.map(|p| p.identifier);
                if next_id == self.shown {
                    return self;
                }
                let mut exiting: Vec<_> = self
                    .exiting
                    .iter()
                    .filter(|(_, p)| Some(p.identifier) != next_id)
                    .cloned()
                    .collect();
                if let Some(previous) = previous.filter(|p| Some(p.identifier) == self.shown) {
                    exiting.push((ticket, previous));
                }
                Rc::new(PresenceState { shown: next_id, exiting })
            }
            PresenceAction::Expire(ticket) => {
                if !self.exiting.iter().any(|(t, _)| *t == ticket) {
                    return self;
                }
                let exiting = self.exiting.iter().filter(|(t, _)| *t != ticket).cloned().collect();
                Rc::new(PresenceState { shown: self.shown, exiting })
            }
        }
    }
}

/// Cards to draw as `(placement, leaving)`, oldest exit first and the current overlay last.
/// `last` is what the previous render showed. Until the effect records its exit it is drawn
/// as leaving, so a replaced card stays mounted across the switch.
fn cards<'a>(
    current: Option<OverlayPlacement>,
    last: Option<OverlayPlacement>,
    exiting: impl Iterator<Item = &'a OverlayPlacement>,
) -> Vec<(OverlayPlacement, bool)> {
    let current_id = current.map(|p| p.identifier);
    let mut cards: Vec<(OverlayPlacement, bool)> = exiting
        .filter(|p| Some(p.identifier) != current_id)
        .map(|p| (*p, true))
        .collect();
    if let Some(last) = last.filter(|p| Some(p.identifier) != current_id) {
        if !cards.iter().any(|(p, _)| p.identifier == last.identifier) {
            cards.push((last, true));
        }
    }
    cards.extend(current.map(|p| (p, false)));
    cards
}

#[derive(Properties, PartialEq)]
pub struct OverlayPresenceProps {
    pub placement: Option<OverlayPlacement>,
}

/// Renders the current overlay and keeps replaced ones mounted until their exit finishes.
/// An entering overlay does not wait for the previous one to leave.
#[function_component(OverlayPresence)]
pub fn overlay_presence(props: &OverlayPresenceProps) -> Html {
    let presence = use_reducer(PresenceState::default);
    let tickets = use_mut_ref(|| 0u64);
    let last = use_mut_ref(|| None::<OverlayPlacement>);

    let drawn = cards(props.placement, *last.borrow(), presence.exiting());

    {
        let presence = presence.clone();
        use_effect_with_deps(
            move |placement| {
                let ticket = {
                    let mut next = tickets.borrow_mut();
                    *next += 1;
                    *next
                };
                let previous = last.replace(*placement);
                presence.dispatch(PresenceAction::Show {
                    placement: *placement,
                    previous,
                    ticket,
                });
                let presence = presence.clone();
                Timeout::new(OVERLAY_TRANSITION_MS, move || {
                    presence.dispatch(PresenceAction::Expire(ticket));
                })
                .forget();
                || ()
            },
            props.placement,
        );
    }

    html! {
        <>
            { for drawn.into_iter().map(|(placement, leaving)| html! {
                <OverlayCard key={placement.identifier} placement={placement} leaving={leaving} />
            }) }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::overlays::OverlayTable;
    use crate::catalog::regions::SUPPORT_CATALOG;
    use crate::hover::policy::resolve_overlay;

    fn placement(id: &str) -> Option<OverlayPlacement> {
        resolve_overlay(Some(id), &SUPPORT_CATALOG, OverlayTable::standard())
    }

    fn show(state: Rc<PresenceState>, id: Option<&str>, previous: Option<&str>, ticket: u64) -> Rc<PresenceState> {
        state.reduce(PresenceAction::Show {
            placement: id.and_then(placement),
            previous: previous.and_then(placement),
            ticket,
        })
    }

    fn leaving(state: &PresenceState) -> Vec<&'static str> {
        state.exiting().map(|p| p.identifier).collect()
    }

    #[test]
    fn replaced_overlay_exits_alongside_the_new_one() {
        let state = Rc::new(PresenceState::default());
        let state = show(state, Some("Help Desk Services"), None, 0);
        assert!(leaving(&state).is_empty());

        let state = show(state, Some("SAP Basis Services"), Some("Help Desk Services"), 1);
        assert_eq!(leaving(&state), ["Help Desk Services"]);

        let state = state.reduce(PresenceAction::Expire(1));
        assert!(leaving(&state).is_empty());
    }

    #[test]
    fn clearing_starts_an_exit() {
        let state = show(Rc::new(PresenceState::default()), Some("Help Desk Services"), None, 0);
        let state = show(state, None, Some("Help Desk Services"), 1);
        assert_eq!(leaving(&state), ["Help Desk Services"]);
    }

    #[test]
    fn re_entering_cancels_the_exit() {
        let state = show(Rc::new(PresenceState::default()), Some("Help Desk Services"), None, 0);
        let state = show(state, None, Some("Help Desk Services"), 1);
        let state = show(state, Some("Help Desk Services"), None, 2);
        assert!(leaving(&state).is_empty());
    }

    #[test]
    fn stale_expiry_is_ignored() {
        let state = show(Rc::new(PresenceState::default()), Some("Help Desk Services"), None, 0);
        let same = state.clone().reduce(PresenceAction::Expire(0));
        assert!(Rc::ptr_eq(&state, &same));
    }

    const NOTHING_LEAVING: [OverlayPlacement; 0] = [];

    fn drawn(cards: Vec<(OverlayPlacement, bool)>) -> Vec<(&'static str, bool)> {
        cards.into_iter().map(|(p, leaving)| (p.identifier, leaving)).collect()
    }

    #[test]
    fn replaced_card_stays_drawn_before_its_exit_is_recorded() {
        let shown = cards(placement("SAP Basis Services"), placement("Help Desk Services"), NOTHING_LEAVING.iter());
        assert_eq!(drawn(shown), [("Help Desk Services", true), ("SAP Basis Services", false)]);
    }

    #[test]
    fn recorded_exit_is_drawn_once() {
        let state = show(Rc::new(PresenceState::default()), Some("Help Desk Services"), None, 0);
        let state = show(state, Some("SAP Basis Services"), Some("Help Desk Services"), 1);
        let before_effect = cards(placement("SAP Basis Services"), placement("Help Desk Services"), state.exiting());
        let after_effect = cards(placement("SAP Basis Services"), placement("SAP Basis Services"), state.exiting());
        let expected = [("Help Desk Services", true), ("SAP Basis Services", false)];
        assert_eq!(drawn(before_effect), expected);
        assert_eq!(drawn(after_effect), expected);
    }

    #[test]
    fn re_hovered_card_is_drawn_entering_only() {
        let state = show(Rc::new(PresenceState::default()), Some("Help Desk Services"), None, 0);
        let state = show(state, None, Some("Help Desk Services"), 1);
        let shown = cards(placement("Help Desk Services"), None, state.exiting());
        assert_eq!(drawn(shown), [("Help Desk Services", false)]);
    }

    #[test]
    fn cleared_overlay_is_drawn_leaving() {
        let shown = cards(None, placement("Help Desk Services"), NOTHING_LEAVING.iter());
        assert_eq!(drawn(shown), [("Help Desk Services", true)]);
        assert!(cards(None, None, NOTHING_LEAVING.iter()).is_empty());
    }

    #[test]
    fn unchanged_placement_is_a_no_op() {
        let state = show(Rc::new(PresenceState::default()), Some("Help Desk Services"), None, 0);
        let again = show(state.clone(), Some("Help Desk Services"), Some("Help Desk Services"), 1);
        assert!(Rc::ptr_eq(&state, &again));
    }
}
