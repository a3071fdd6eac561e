//! Owns every live controller, keyed by the element it was created for.

use std::collections::BTreeMap;
use std::time::Duration;

use tracing::{debug, info};

use crate::controller::Controller;
use crate::element::{Element, ElementId};
use crate::input::{InputEvent, InputOutcome};
use crate::options::CarouselOptions;

/// Root attributes that opt an element into [`CarouselRegistry::auto_init`].
pub const AUTO_INIT_ATTRIBUTES: [&str; 2] = ["data-carousel", "data-auto-init"];

#[derive(Default)]
pub struct CarouselRegistry {
    controllers: BTreeMap<ElementId, Controller>,
}

impl CarouselRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller for `element`. An element that already has one
    /// keeps it; the new markup and options are discarded.
    pub fn create(&mut self, element: Element, options: CarouselOptions) -> &mut Controller {
        let id = element.id();
        if self.controllers.contains_key(&id) {
            debug!(element = %id, "carousel already registered");
        }
        self.controllers.entry(id).or_insert_with(|| {
            info!(element = %id, panes = element.panes.len(), "carousel created");
            Controller::new(element, options)
        })
    }

    /// Creates controllers for every element carrying an auto-init attribute,
    /// reading options from its `data-*` attributes. Returns the ids of the
    /// controllers that were newly created.
    pub fn auto_init(&mut self, elements: impl IntoIterator<Item = Element>) -> Vec<ElementId> {
        let mut created = Vec::new();
        for element in elements {
            let id = element.id();
            let opted_in = AUTO_INIT_ATTRIBUTES.iter().any(|name| element.root.has_attribute(name));
            if !opted_in || self.controllers.contains_key(&id) {
                continue;
            }
            let options = CarouselOptions::from_data_attributes(&element.root);
            self.create(element, options);
            created.push(id);
        }
        created
    }

    pub fn get(&self, id: ElementId) -> Option<&Controller> {
        self.controllers.get(&id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Controller> {
        self.controllers.get_mut(&id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.controllers.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.controllers.keys().copied()
    }

    /// Destroys the controller and hands its restored markup back.
    pub fn destroy(&mut self, id: ElementId) -> Option<Element> {
        let controller = self.controllers.remove(&id)?;
        info!(element = %id, "carousel removed");
        Some(controller.into_element())
    }

    pub fn destroy_all(&mut self) -> Vec<Element> {
        let ids: Vec<ElementId> = self.ids().collect();
        ids.into_iter().filter_map(|id| self.destroy(id)).collect()
    }

    /// Routes input to one controller. Unknown elements ignore it.
    pub fn dispatch(&mut self, id: ElementId, event: InputEvent) -> InputOutcome {
        match self.controllers.get_mut(&id) {
            Some(controller) => controller.handle_input(event),
            None => InputOutcome::ignored(),
        }
    }

    /// Page-level visibility reaches every carousel.
    pub fn set_visibility(&mut self, visible: bool) {
        for controller in self.controllers.values_mut() {
            controller.handle_input(InputEvent::VisibilityChange { visible });
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        for controller in self.controllers.values_mut() {
            controller.tick(dt);
        }
    }
}
