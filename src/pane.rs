use crate::element::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pane {
    pub index: usize,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

/// Ordered panes and their indicators, discovered once from the markup.
///
/// The registry holds the authoritative active flags and mirrors every change
/// onto the element's nodes so the host can render from either.
#[derive(Debug, Clone, Default)]
pub struct PaneRegistry {
    panes: Vec<Pane>,
    indicators: Vec<Indicator>,
}

impl PaneRegistry {
    /// Reads panes and indicators from `element` and normalizes the active
    /// flags: the first pane marked active wins, pane 0 is chosen when none
    /// is, and indicators are synced to the winning pane.
    ///
    /// Returns the registry and the initial current index.
    pub fn discover(element: &mut Element) -> (Self, usize) {
        let current = element.panes.iter().position(|node| node.active).unwrap_or(0);

        let panes = (0..element.panes.len())
            .map(|index| Pane { index, active: index == current })
            .collect();
        let indicators = (0..element.indicators.len())
            .map(|index| Indicator { index, active: index == current })
            .collect();

        let registry = Self { panes, indicators };
        registry.mirror(element);
        (registry, current)
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn has_indicators(&self) -> bool {
        !self.indicators.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.panes.iter().find(|pane| pane.active).map(|pane| pane.index)
    }

    /// Moves the active flag from pane/indicator `from` to `to`.
    pub fn swap_active(&mut self, from: usize, to: usize, element: &mut Element) {
        if let Some(pane) = self.panes.get_mut(from) {
            pane.active = false;
        }
        if let Some(pane) = self.panes.get_mut(to) {
            pane.active = true;
        }
        // Indicators are optional and may be fewer than the panes
        if let Some(indicator) = self.indicators.get_mut(from) {
            indicator.active = false;
        }
        if let Some(indicator) = self.indicators.get_mut(to) {
            indicator.active = true;
        }
        self.mirror(element);
    }

    fn mirror(&self, element: &mut Element) {
        for (pane, node) in self.panes.iter().zip(element.panes.iter_mut()) {
            node.active = pane.active;
        }
        for (indicator, node) in self.indicators.iter().zip(element.indicators.iter_mut()) {
            node.active = indicator.active;
        }
    }
}
