//! Ordered fact tables for the detail panel.
//!
//! The display order and the searchable/plain split are data, not code:
//! each fact is a descriptor naming the object field, its rendering mode,
//! and an accessor. [`collect_facts`] folds a record into the flat list
//! the panel iterates, so no per-field render branches exist anywhere.

use crate::types::ObjectRecord;

// ---------------------------------------------------------------------------
// Fact descriptors
// ---------------------------------------------------------------------------

/// How a fact's value is rendered in the panel.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum FactMode {
    /// Clickable link that dispatches a new search on the fact's field.
    Search,
    /// Plain text.
    Plain,
}

/// A named object attribute with its rendering mode and accessor.
pub struct FactField {
    pub name: &'static str,
    pub mode: FactMode,
    get: fn(&ObjectRecord) -> Option<&str>,
}

/// Searchable facts, in display order.
pub static SEARCHABLE_FACTS: &[FactField] = &[
    FactField { name: "culture", mode: FactMode::Search, get: |r| r.culture.as_deref() },
    FactField { name: "technique", mode: FactMode::Search, get: |r| r.technique.as_deref() },
    FactField { name: "medium", mode: FactMode::Search, get: |r| r.medium.as_deref() },
];

/// Plain-text facts, in display order.
pub static PLAIN_FACTS: &[FactField] = &[
    FactField { name: "description", mode: FactMode::Plain, get: |r| r.description.as_deref() },
    FactField { name: "dated", mode: FactMode::Plain, get: |r| r.dated.as_deref() },
    FactField { name: "style", mode: FactMode::Plain, get: |r| r.style.as_deref() },
    FactField { name: "dimensions", mode: FactMode::Plain, get: |r| r.dimensions.as_deref() },
    FactField { name: "department", mode: FactMode::Plain, get: |r| r.department.as_deref() },
    FactField { name: "division", mode: FactMode::Plain, get: |r| r.division.as_deref() },
    FactField { name: "contact", mode: FactMode::Plain, get: |r| r.contact.as_deref() },
    FactField { name: "creditline", mode: FactMode::Plain, get: |r| r.creditline.as_deref() },
];

// ---------------------------------------------------------------------------
// Fact collection
// ---------------------------------------------------------------------------

/// One display-ready fact: a label plus its value, and the search term to
/// query on when the fact is a link.
#[derive(Clone, PartialEq)]
pub struct Fact {
    pub label: &'static str,
    pub value: String,
    pub search_term: Option<&'static str>,
}

fn push_field_facts(record: &ObjectRecord, fields: &[FactField], facts: &mut Vec<Fact>) {
    for field in fields {
        if let Some(value) = (field.get)(record).filter(|v| !v.is_empty()) {
            let search_term = match field.mode {
                FactMode::Search => Some(field.name),
                FactMode::Plain => None,
            };
            facts.push(Fact { label: field.name, value: value.to_string(), search_term });
        }
    }
}

/// Fold a record into the panel's display-ordered fact list: searchable
/// facts, then one "person" entry per listed person, then plain facts.
/// Absent or empty fields are skipped.
pub fn collect_facts(record: &ObjectRecord) -> Vec<Fact> {
    let mut facts = Vec::new();

    push_field_facts(record, SEARCHABLE_FACTS, &mut facts);

    if let Some(people) = &record.people {
        for person in people {
            facts.push(Fact {
                label: "person",
                value: person.displayname.clone(),
                search_term: Some("displayname"),
            });
        }
    }

    push_field_facts(record, PLAIN_FACTS, &mut facts);

    facts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Person;

    fn record() -> ObjectRecord {
        ObjectRecord {
            title: Some("Vase".into()),
            dated: Some("1900".into()),
            culture: Some("Ming".into()),
            people: Some(vec![Person { displayname: "Jane Doe".into() }]),
            ..Default::default()
        }
    }

    #[test]
    fn missing_fields_produce_no_facts() {
        let facts = collect_facts(&ObjectRecord::default());
        assert!(facts.is_empty());
    }

    #[test]
    fn empty_strings_are_skipped() {
        let record = ObjectRecord {
            culture: Some(String::new()),
            medium: Some("Porcelain".into()),
            ..Default::default()
        };
        let facts = collect_facts(&record);
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].label, "medium");
    }

    #[test]
    fn facts_follow_display_order() {
        let record = ObjectRecord {
            creditline: Some("Gift of Jane Doe".into()),
            medium: Some("Porcelain".into()),
            culture: Some("Ming".into()),
            description: Some("A vase.".into()),
            people: Some(vec![
                Person { displayname: "Jane Doe".into() },
                Person { displayname: "John Roe".into() },
            ]),
            ..Default::default()
        };
        let labels: Vec<&str> = collect_facts(&record).iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            ["culture", "medium", "person", "person", "description", "creditline"]
        );
    }

    #[test]
    fn searchable_facts_carry_their_field_as_term() {
        let facts = collect_facts(&record());
        let culture = facts.iter().find(|f| f.label == "culture").unwrap();
        assert_eq!(culture.value, "Ming");
        assert_eq!(culture.search_term, Some("culture"));
    }

    #[test]
    fn people_become_person_facts_on_displayname() {
        let facts = collect_facts(&record());
        let person = facts.iter().find(|f| f.label == "person").unwrap();
        assert_eq!(person.value, "Jane Doe");
        assert_eq!(person.search_term, Some("displayname"));
    }

    #[test]
    fn plain_facts_have_no_search_term() {
        let facts = collect_facts(&record());
        let dated = facts.iter().find(|f| f.label == "dated").unwrap();
        assert_eq!(dated.value, "1900");
        assert_eq!(dated.search_term, None);
    }

    #[test]
    fn featured_example_yields_only_set_fields() {
        // dated shows twice: in the header and again as a plain fact.
        let labels: Vec<&str> = collect_facts(&record()).iter().map(|f| f.label).collect();
        assert_eq!(labels, ["culture", "person", "dated"]);
    }
}
