use std::{ops::Deref, rc::Rc};
use yew::prelude::Reducible;

use selection::{Action, Widget, WidgetConfig};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetModel(Widget);

impl WidgetModel {
    pub fn new(config: WidgetConfig, pending_prefill: usize) -> Self {
        Self(Widget::new(config, pending_prefill))
    }
}

impl Reducible for WidgetModel {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::trace!("widget:{:?}", action);
        Rc::new(Self(self.0.apply(action)))
    }
}

impl Deref for WidgetModel {
    type Target = Widget;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
