pub mod composer;
pub mod eligibility;
pub mod recommendation;
pub mod templates;
