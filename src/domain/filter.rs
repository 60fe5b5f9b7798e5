//! Audience targeting filters for notifications.
//!
//! A [`Filters`] value is an ordered list of [`Filter`] conditions joined by
//! `AND`/`OR` operators. The list is sent as-is: the expected shape is
//! `condition (operator condition)*`, but malformed sequences (two conditions
//! in a row, a trailing operator) are not rejected here. The server decides
//! whether a sequence is valid.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    LastSession,
    FirstSession,
    SessionCount,
    SessionTime,
    AmountSpent,
    BoughtSku,
    Tag,
    Language,
    AppVersion,
    Location,
    Email,
    Country,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Relation {
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
    #[serde(rename = "exists")]
    Exists,
    #[serde(rename = "not_exists")]
    NotExists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl Serialize for Operator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("operator", self.as_str())?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// A single targeting condition.
///
/// Only populated fields are serialized. Numeric and date semantics of
/// `value` and `hours_ago` are up to the caller.
pub struct Filter {
    field: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    relation: Option<Relation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hours_ago: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    long: Option<String>,
}

impl Filter {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            key: None,
            relation: None,
            value: None,
            hours_ago: None,
            radius: None,
            lat: None,
            long: None,
        }
    }

    /// A [`Field::Location`] condition: within `radius` meters of `lat`/`long`.
    pub fn location(
        radius: impl Into<String>,
        lat: impl Into<String>,
        long: impl Into<String>,
    ) -> Self {
        Self {
            radius: Some(radius.into()),
            lat: Some(lat.into()),
            long: Some(long.into()),
            ..Self::new(Field::Location)
        }
    }

    /// Parameter for parametrized fields, e.g. the tag name for [`Field::Tag`].
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn relation(mut self, relation: Relation) -> Self {
        self.relation = Some(relation);
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn hours_ago(mut self, hours_ago: impl Into<String>) -> Self {
        self.hours_ago = Some(hours_ago.into());
        self
    }

    pub fn field(&self) -> Field {
        self.field
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FilterElement {
    Condition(Filter),
    Operator(Operator),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
/// Ordered filter expression, serialized as a JSON array.
pub struct Filters(Vec<FilterElement>);

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_filter(&mut self, filter: Filter) -> &mut Self {
        self.0.push(FilterElement::Condition(filter));
        self
    }

    pub fn add_or(&mut self) -> &mut Self {
        self.0.push(FilterElement::Operator(Operator::Or));
        self
    }

    pub fn add_and(&mut self) -> &mut Self {
        self.0.push(FilterElement::Operator(Operator::And));
        self
    }

    pub fn elements(&self) -> &[FilterElement] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn condition_and_condition_serializes_to_three_elements() {
        let mut filters = Filters::new();
        filters
            .add_filter(
                Filter::new(Field::Tag)
                    .key("vip")
                    .relation(Relation::Equal)
                    .value("true"),
            )
            .add_and()
            .add_filter(
                Filter::new(Field::Country)
                    .relation(Relation::Equal)
                    .value("US"),
            );

        let value = serde_json::to_value(&filters).unwrap();
        assert_eq!(
            value,
            json!([
                {"field": "tag", "key": "vip", "relation": "=", "value": "true"},
                {"operator": "AND"},
                {"field": "country", "relation": "=", "value": "US"},
            ])
        );

        let first = value[0].as_object().unwrap();
        for absent in ["radius", "lat", "long", "hours_ago"] {
            assert!(!first.contains_key(absent), "{absent} should be omitted");
        }
    }

    #[test]
    fn operator_serializes_as_single_key_object() {
        assert_eq!(
            serde_json::to_string(&Operator::Or).unwrap(),
            r#"{"operator":"OR"}"#
        );
        assert_eq!(
            serde_json::to_string(&Operator::And).unwrap(),
            r#"{"operator":"AND"}"#
        );
    }

    #[test]
    fn malformed_sequences_are_passed_through() {
        let mut filters = Filters::new();
        filters
            .add_filter(Filter::new(Field::Language).relation(Relation::Exists))
            .add_filter(Filter::new(Field::Email).relation(Relation::NotExists))
            .add_or();

        let value = serde_json::to_value(&filters).unwrap();
        assert_eq!(
            value,
            json!([
                {"field": "language", "relation": "exists"},
                {"field": "email", "relation": "not_exists"},
                {"operator": "OR"},
            ])
        );
    }

    #[test]
    fn location_condition_carries_geo_fields() {
        let value = serde_json::to_value(Filter::location("1000", "55.75", "37.61")).unwrap();
        assert_eq!(
            value,
            json!({"field": "location", "radius": "1000", "lat": "55.75", "long": "37.61"})
        );
    }

    #[test]
    fn time_fields_use_snake_case_names() {
        let filter = Filter::new(Field::LastSession)
            .relation(Relation::GreaterThan)
            .hours_ago("48");
        let value = serde_json::to_value(filter).unwrap();
        assert_eq!(
            value,
            json!({"field": "last_session", "relation": ">", "hours_ago": "48"})
        );

        let value = serde_json::to_value(Filter::new(Field::BoughtSku)).unwrap();
        assert_eq!(value, json!({"field": "bought_sku"}));
    }
}
