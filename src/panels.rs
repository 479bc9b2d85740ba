//! Static panel registry: render order and per-panel dataset requirements,
//! resolved at compile time instead of by assembling module names at
//! runtime.

use crate::config::DatasetKey;

/// The eleven thematic panels, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Stability,
    Safety,
    Engagement,
    Stress,
    TaskCompliance,
    Collaboration,
    Wellbeing,
    Downtime,
    Oee,
    Resilience,
    SpatialDynamics,
}

impl PanelId {
    pub const RENDER_ORDER: [PanelId; 11] = [
        PanelId::Stability,
        PanelId::Safety,
        PanelId::Engagement,
        PanelId::Stress,
        PanelId::TaskCompliance,
        PanelId::Collaboration,
        PanelId::Wellbeing,
        PanelId::Downtime,
        PanelId::Oee,
        PanelId::Resilience,
        PanelId::SpatialDynamics,
    ];

    /// The dataset feeds this panel consumes from the filtered-table map.
    pub fn datasets(&self) -> &'static [DatasetKey] {
        match self {
            PanelId::Stability => &[DatasetKey::Stability],
            PanelId::Safety => &[DatasetKey::Safety],
            PanelId::Engagement => &[DatasetKey::Engagement, DatasetKey::PsychSafety],
            PanelId::Stress => &[DatasetKey::Stress, DatasetKey::PerceivedWorkload],
            PanelId::TaskCompliance => &[DatasetKey::Tasks],
            PanelId::Collaboration => &[DatasetKey::Collaboration, DatasetKey::TeamCohesion],
            PanelId::Wellbeing => &[
                DatasetKey::Wellbeing,
                DatasetKey::PsychSafety,
                DatasetKey::PerceivedWorkload,
            ],
            PanelId::Downtime => &[DatasetKey::Downtime],
            PanelId::Oee => &[DatasetKey::Oee],
            PanelId::Resilience => &[DatasetKey::Resilience],
            PanelId::SpatialDynamics => &[DatasetKey::Spatial],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelId::Stability => "stability_panel",
            PanelId::Safety => "safety_panel",
            PanelId::Engagement => "engagement_panel",
            PanelId::Stress => "stress_panel",
            PanelId::TaskCompliance => "task_compliance_panel",
            PanelId::Collaboration => "collaboration_panel",
            PanelId::Wellbeing => "wellbeing_panel",
            PanelId::Downtime => "downtime_panel",
            PanelId::Oee => "oee_panel",
            PanelId::Resilience => "resilience_panel",
            PanelId::SpatialDynamics => "spatial_dynamics_panel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_order_is_distinct() {
        let mut ids = PanelId::RENDER_ORDER.to_vec();
        ids.dedup();
        assert_eq!(ids.len(), 11);
    }

    #[test]
    fn test_every_panel_names_at_least_one_dataset() {
        for panel in PanelId::RENDER_ORDER {
            assert!(!panel.datasets().is_empty(), "{:?}", panel);
        }
    }
}
