//! Built-in rule sets
//!
//! The sepsis article corrections ship as TOML embedded in the binary, the
//! same format users write their own rules in.

use super::RuleSet;
use crate::error::Result;

const SEPSIS_RULES: &str = include_str!("sepsis.toml");

/// Corrections and citations for the "Sepsis and Septic Shock" article
pub fn sepsis() -> Result<RuleSet> {
    RuleSet::from_toml(SEPSIS_RULES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::OutputMode;

    fn label_for(rules: &RuleSet, text: &str) -> Option<String> {
        rules.find(text).and_then(|i| rules.get(i)).map(|r| r.label())
    }

    #[test]
    fn sepsis_rules_parse() {
        let rules = sepsis().unwrap();
        assert_eq!(rules.len(), 60);
        assert!(rules.rules().iter().all(|r| r.output == OutputMode::Rewrite));
    }

    #[test]
    fn section_headings_are_renumbered_once() {
        let rules = sepsis().unwrap();
        let index = rules.find("6. Principles of Management").unwrap();
        let rule = rules.get(index).unwrap();
        assert_eq!(
            rule.segments[0].text.as_deref(),
            Some("7. Principles of Management")
        );
        // The rewritten heading matches no renumbering rule
        assert_eq!(rules.find("7. Principles of Management"), None);
    }

    #[test]
    fn order_resolves_overlaps() {
        let rules = sepsis().unwrap();
        // "SEPSISPAM" precedes "65 Trial"
        assert_eq!(
            label_for(&rules, "SEPSISPAM and the 65 Trial both tested MAP targets").as_deref(),
            Some("SEPSISPAM")
        );
        // SAFE needs albumin in any case
        assert_eq!(
            label_for(&rules, "The SAFE study of Albumin").as_deref(),
            Some("SAFE")
        );
        assert_eq!(label_for(&rules, "It is SAFE"), None);
    }

    #[test]
    fn lactate_rule_corrects_units() {
        let rules = sepsis().unwrap();
        let rule = rules
            .get(rules.find("Serum lactate level >18 mg/dL (2 mmol/L)").unwrap())
            .unwrap();
        assert_eq!(
            rule.segments[0].text.as_deref(),
            Some("Serum lactate level >2 mmol/L (18 mg/dL) despite adequate volume resuscitation")
        );
        assert_eq!(rule.segments[0].cite, vec![2]);
        assert!(rule.log.as_deref().unwrap().starts_with("CORRECTED"));
    }
}
