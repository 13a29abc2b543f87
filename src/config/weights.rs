//! Component weights for every metric.
//!
//! Each metric is a weighted sum of its components. The defaults below are
//! the canonical weighting; a `[weights.<metric>]` table in
//! `.agentscore.toml` may override them as long as the set still sums to 1.0.

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Tolerance used when checking that a weight set sums to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// Shared behaviour of a named set of component weights.
pub trait ComponentWeights {
    /// `(component name, weight)` in declaration order.
    fn components(&self) -> Vec<(&'static str, f64)>;

    /// Multiply every weight by `factor`.
    fn scale(&mut self, factor: f64);

    fn sum(&self) -> f64 {
        self.components().iter().map(|(_, w)| w).sum()
    }

    /// Every weight in [0, 1] and the set summing to 1.0.
    fn validate(&self) -> Result<()> {
        for (name, weight) in self.components() {
            if !(0.0..=1.0).contains(&weight) {
                return Err(Error::Validation(format!(
                    "{name} weight must be between 0.0 and 1.0, got {weight}"
                )));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(Error::Validation(format!(
                "weights must sum to 1.0, but sum to {sum:.3}"
            )));
        }
        Ok(())
    }

    /// Rescale so the set sums to exactly 1.0.
    fn normalize(&mut self) {
        let sum = self.sum();
        if sum > 0.0 && (sum - 1.0).abs() > f64::EPSILON {
            self.scale(1.0 / sum);
        }
    }
}

macro_rules! weight_set {
    ($(#[$meta:meta])* $name:ident { $($field:ident = $default:expr),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $name {
            $(pub $field: f64,)+
        }

        impl Default for $name {
            fn default() -> Self {
                Self { $($field: $default,)+ }
            }
        }

        impl ComponentWeights for $name {
            fn components(&self) -> Vec<(&'static str, f64)> {
                vec![$((stringify!($field), self.$field),)+]
            }

            fn scale(&mut self, factor: f64) {
                $(self.$field *= factor;)+
            }
        }
    };
}

weight_set! {
    /// Architectural coherence.
    AcsWeights {
        pattern_consistency = 0.4,
        file_organization = 0.3,
        naming_consistency = 0.2,
        dependency_structure = 0.1,
    }
}

weight_set! {
    /// Dependency traversal accuracy.
    DtaWeights {
        import_accuracy = 0.4,
        reference_validity = 0.35,
        order_correctness = 0.25,
    }
}

weight_set! {
    /// Multi-session memory for `multi_session_development` tasks.
    MmrWeights {
        naming_consistency = 0.4,
        approach_consistency = 0.35,
        state_management = 0.25,
    }
}

weight_set! {
    /// Context-consistency fallback used by multi-session memory for every other category.
    ContextConsistencyWeights {
        context_usage = 0.4,
        requirement_coverage = 0.35,
        terminology_consistency = 0.25,
    }
}

weight_set! {
    /// Cross-file reasoning depth.
    CfrdWeights {
        interface_usage = 0.35,
        shared_state_coordination = 0.30,
        modification_coordination = 0.25,
        data_flow = 0.10,
    }
}

weight_set! {
    /// Incremental development capability.
    IdcWeights {
        backward_compatibility = 0.4,
        code_reuse = 0.3,
        extension_patterns = 0.2,
        minimal_disruption = 0.1,
    }
}

weight_set! {
    /// Information coverage utilization.
    IcuWeights {
        context_usage = 0.4,
        requirement_coverage = 0.35,
        information_extraction = 0.25,
    }
}

weight_set! {
    /// Information extraction for `architectural_understanding` tasks.
    ArchitecturalExtractionWeights {
        pattern_recognition = 0.4,
        structural_elements = 0.35,
        dependency_relations = 0.25,
    }
}

weight_set! {
    /// Information extraction for `feature_implementation` tasks.
    FeatureExtractionWeights {
        business_logic = 0.45,
        data_flow = 0.30,
        error_handling = 0.25,
    }
}

weight_set! {
    /// Information extraction for every other category.
    GeneralExtractionWeights {
        key_concepts = 0.4,
        actions = 0.35,
        technical_requirements = 0.25,
    }
}

/// All weight sets, one per metric or extraction strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricWeights {
    pub acs: AcsWeights,
    pub dta: DtaWeights,
    pub mmr: MmrWeights,
    pub mmr_fallback: ContextConsistencyWeights,
    pub cfrd: CfrdWeights,
    pub idc: IdcWeights,
    pub icu: IcuWeights,
    pub icu_architectural: ArchitecturalExtractionWeights,
    pub icu_feature: FeatureExtractionWeights,
    pub icu_general: GeneralExtractionWeights,
}

impl MetricWeights {
    fn sets(&self) -> Vec<(&'static str, &dyn ComponentWeights)> {
        vec![
            ("acs", &self.acs as &dyn ComponentWeights),
            ("dta", &self.dta as &dyn ComponentWeights),
            ("mmr", &self.mmr as &dyn ComponentWeights),
            ("mmr_fallback", &self.mmr_fallback as &dyn ComponentWeights),
            ("cfrd", &self.cfrd as &dyn ComponentWeights),
            ("idc", &self.idc as &dyn ComponentWeights),
            ("icu", &self.icu as &dyn ComponentWeights),
            ("icu_architectural", &self.icu_architectural as &dyn ComponentWeights),
            ("icu_feature", &self.icu_feature as &dyn ComponentWeights),
            ("icu_general", &self.icu_general as &dyn ComponentWeights),
        ]
    }

    fn sets_mut(&mut self) -> Vec<(&'static str, &mut dyn ComponentWeights)> {
        vec![
            ("acs", &mut self.acs as &mut dyn ComponentWeights),
            ("dta", &mut self.dta as &mut dyn ComponentWeights),
            ("mmr", &mut self.mmr as &mut dyn ComponentWeights),
            ("mmr_fallback", &mut self.mmr_fallback as &mut dyn ComponentWeights),
            ("cfrd", &mut self.cfrd as &mut dyn ComponentWeights),
            ("idc", &mut self.idc as &mut dyn ComponentWeights),
            ("icu", &mut self.icu as &mut dyn ComponentWeights),
            ("icu_architectural", &mut self.icu_architectural as &mut dyn ComponentWeights),
            ("icu_feature", &mut self.icu_feature as &mut dyn ComponentWeights),
            ("icu_general", &mut self.icu_general as &mut dyn ComponentWeights),
        ]
    }

    /// Validation messages for every invalid set, prefixed with the set name.
    pub fn validate(&self) -> Vec<String> {
        self.sets()
            .into_iter()
            .filter_map(|(name, set)| set.validate().err().map(|e| format!("{name}: {e}")))
            .collect()
    }

    /// Replace invalid sets with their defaults and normalise the rest.
    /// Returns the validation messages of the sets that were replaced.
    pub fn sanitize(&mut self) -> Vec<String> {
        let mut problems = Vec::new();
        let mut invalid = Vec::new();

        for (name, set) in self.sets_mut() {
            match set.validate() {
                Ok(()) => set.normalize(),
                Err(e) => {
                    problems.push(format!("{name}: {e}"));
                    invalid.push(name);
                }
            }
        }

        for name in invalid {
            self.reset(name);
        }
        problems
    }

    fn reset(&mut self, name: &str) {
        let defaults = Self::default();
        match name {
            "acs" => self.acs = defaults.acs,
            "dta" => self.dta = defaults.dta,
            "mmr" => self.mmr = defaults.mmr,
            "mmr_fallback" => self.mmr_fallback = defaults.mmr_fallback,
            "cfrd" => self.cfrd = defaults.cfrd,
            "idc" => self.idc = defaults.idc,
            "icu" => self.icu = defaults.icu,
            "icu_architectural" => self.icu_architectural = defaults.icu_architectural,
            "icu_feature" => self.icu_feature = defaults.icu_feature,
            "icu_general" => self.icu_general = defaults.icu_general,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = MetricWeights::default();
        assert!(weights.validate().is_empty(), "{:?}", weights.validate());
    }

    #[test]
    fn test_each_default_set_sums_to_one() {
        let weights = MetricWeights::default();
        for (name, set) in weights.sets() {
            assert!((set.sum() - 1.0).abs() < 1e-9, "{name} sums to {}", set.sum());
        }
    }

    #[test]
    fn test_components_follow_declaration_order() {
        let names: Vec<_> = AcsWeights::default()
            .components()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            names,
            vec![
                "pattern_consistency",
                "file_organization",
                "naming_consistency",
                "dependency_structure"
            ]
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_and_bad_sum() {
        let bad_range = DtaWeights {
            import_accuracy: 1.5,
            reference_validity: 0.0,
            order_correctness: 0.0,
        };
        assert!(matches!(bad_range.validate(), Err(Error::Validation(_))));

        let bad_sum = DtaWeights {
            import_accuracy: 0.5,
            reference_validity: 0.5,
            order_correctness: 0.5,
        };
        let err = bad_sum.validate().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("1.500"));
    }

    #[test]
    fn test_sanitize_replaces_invalid_and_keeps_valid() {
        let mut weights = MetricWeights::default();
        weights.cfrd.data_flow = 0.9;
        weights.icu = IcuWeights {
            context_usage: 0.5,
            requirement_coverage: 0.3,
            information_extraction: 0.2,
        };

        let problems = weights.sanitize();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].starts_with("cfrd: Validation error:"));
        assert_eq!(weights.cfrd, CfrdWeights::default());
        assert_eq!(weights.icu.context_usage, 0.5);
    }

    #[test]
    fn test_normalize_rescales_within_tolerance() {
        let mut weights = IdcWeights {
            backward_compatibility: 0.4,
            code_reuse: 0.3,
            extension_patterns: 0.2,
            minimal_disruption: 0.1005,
        };
        assert!(weights.validate().is_ok());
        weights.normalize();
        assert!((weights.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_toml_table_keeps_other_defaults() {
        let weights: MetricWeights = toml::from_str(
            "[acs]\npattern_consistency = 0.5\nfile_organization = 0.2\n",
        )
        .unwrap();
        assert_eq!(weights.acs.pattern_consistency, 0.5);
        assert_eq!(weights.acs.naming_consistency, 0.2);
        assert_eq!(weights.dta, DtaWeights::default());
    }
}
