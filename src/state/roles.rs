use std::time::Instant;

use palette::Srgb;

use crate::analytics::Role;
use crate::animation::ColorFade;
use crate::dispatch::RoleIndicatorSink;
use crate::render::colors::Gradient;

/// One role's count text and proportion color
#[derive(Debug, Clone)]
pub struct RoleIndicator {
    pub count_text: String,
    pub fade: ColorFade,
}

/// Role balance indicators for tank, damage and support
#[derive(Debug, Clone)]
pub struct RolePanel {
    indicators: [RoleIndicator; 3],
    no_data: bool,
}

impl RolePanel {
    /// Indicators start on the uniform "no data" color
    pub fn new(gradient: &Gradient) -> Self {
        let indicator = RoleIndicator {
            count_text: "0".to_string(),
            fade: ColorFade::settled(gradient.interpolate(1.0 / 3.0)),
        };

        Self {
            indicators: [indicator.clone(), indicator.clone(), indicator],
            no_data: true,
        }
    }

    pub fn indicator(&self, role: Role) -> &RoleIndicator {
        &self.indicators[role.index()]
    }

    /// Whether the last aggregation counted any hero. Zero counts, whether
    /// from an empty, missing or malformed rule set, are "no data".
    pub fn has_data(&self) -> bool {
        !self.no_data
    }
}

impl RoleIndicatorSink for RolePanel {
    fn set_count_text(&mut self, role: Role, text: String) {
        self.indicators[role.index()].count_text = text;
    }

    fn set_color(&mut self, role: Role, color: Srgb<u8>) {
        self.indicators[role.index()]
            .fade
            .retarget(color, Instant::now());
    }

    fn set_no_data(&mut self, no_data: bool) {
        self.no_data = no_data;
    }
}
