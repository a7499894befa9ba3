use std::rc::Rc;

use log::debug;
use yew::prelude::*;
use yew::AttrValue;

/// The page's single hover slot. Both catalogs read it; every hoverable entry writes it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverState {
    current: Option<AttrValue>,
}

impl HoverState {
    pub fn hovered(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum HoverAction {
    Enter(AttrValue),
    Leave,
}

impl Reducible for HoverState {
    type Action = HoverAction;

    // Last write wins. Leave clears whatever is stored, even if another entry set it.
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            HoverAction::Enter(identifier) => Some(identifier),
            HoverAction::Leave => None,
        };
        if next == self.current {
            return self;
        }
        Rc::new(HoverState { current: next })
    }
}

/// Handle passed through context to every region that reads or writes the hover slot.
#[derive(Clone, PartialEq)]
pub struct HoverMediator {
    state: UseReducerHandle<HoverState>,
}

impl HoverMediator {
    pub fn set_hovered(&self, identifier: impl Into<AttrValue>) {
        let identifier = identifier.into();
        debug!("hover enter: {}", identifier);
        self.state.dispatch(HoverAction::Enter(identifier));
    }

    pub fn clear_hovered(&self) {
        debug!("hover leave");
        self.state.dispatch(HoverAction::Leave);
    }

    pub fn hovered(&self) -> Option<&str> {
        self.state.hovered()
    }

    pub fn enter_callback(&self, identifier: &'static str) -> Callback<MouseEvent> {
        let mediator = self.clone();
        Callback::from(move |_: MouseEvent| mediator.set_hovered(identifier))
    }

    pub fn leave_callback(&self) -> Callback<MouseEvent> {
        let mediator = self.clone();
        Callback::from(move |_: MouseEvent| mediator.clear_hovered())
    }
}

#[derive(Properties, PartialEq)]
pub struct HoverProviderProps {
    pub children: Children,
}

/// Owns the hover slot for the lifetime of the page. Created empty on mount.
#[function_component(HoverProvider)]
pub fn hover_provider(props: &HoverProviderProps) -> Html {
    let state = use_reducer_eq(HoverState::default);
    let mediator = HoverMediator { state };

    html! {
        <ContextProvider<HoverMediator> context={mediator}>
            { for props.children.iter() }
        </ContextProvider<HoverMediator>>
    }
}

#[hook]
pub fn use_hover_mediator() -> Option<HoverMediator> {
    use_context::<HoverMediator>()
}
