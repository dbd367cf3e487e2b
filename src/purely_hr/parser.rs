use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use roxmltree::{Document, Node, ParsingOptions};

use super::fields::{Field, ID_ATTRIBUTE, ROOT_TAG, STATUS_ATTRIBUTE};
use super::input::XmlInput;
use super::models::{TimeOffRequest, TimeOffTime};
use crate::error::IntegrationError;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

const OFFSET_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

const NAIVE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Converts a PurelyHR time off requests export into [`TimeOffRequest`]s.
#[derive(Debug, Clone)]
pub struct TimeOffRequestsParser {
    input: XmlInput,
}

impl TimeOffRequestsParser {
    pub fn new(input: impl Into<XmlInput>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Parse the whole export. Either every entry converts or nothing is returned.
    ///
    /// Fails with [`IntegrationError::InvalidXml`] when the text is not
    /// well-formed XML, has no root element, or the root is not `<DataService>`.
    /// Field conversion failures (including a missing `SubmittedDate`) surface
    /// as [`IntegrationError::InvalidDate`] / [`IntegrationError::InvalidTime`].
    pub fn time_offs(&self) -> Result<Vec<TimeOffRequest>, IntegrationError> {
        let text = self.input.as_utf8();
        let text = text.trim_start_matches('\u{FEFF}');

        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let document = Document::parse_with_options(text, options)?;

        let root = document.root_element();
        if root.tag_name().name() != ROOT_TAG {
            log::warn!(
                "Unexpected root element <{}> in time off export",
                root.tag_name().name()
            );
            return Err(IntegrationError::invalid_xml(format!(
                "expected root element <{}>, found <{}>",
                ROOT_TAG,
                root.tag_name().name()
            )));
        }

        let requests = root
            .children()
            .filter(Node::is_element)
            .map(build_time_off)
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("Parsed {} time off requests", requests.len());
        Ok(requests)
    }
}

/// Shorthand for `TimeOffRequestsParser::new(input).time_offs()`.
pub fn parse(input: impl Into<XmlInput>) -> Result<Vec<TimeOffRequest>, IntegrationError> {
    TimeOffRequestsParser::new(input).time_offs()
}

fn build_time_off(node: Node<'_, '_>) -> Result<TimeOffRequest, IntegrationError> {
    let id = attribute(node, ID_ATTRIBUTE)?;
    let status = attribute(node, STATUS_ATTRIBUTE)?;
    log::debug!("Building time off request {} ({})", id, status);

    let mut fields = read_fields(node);
    let mut take = |field: Field| fields.remove(&field);

    Ok(TimeOffRequest {
        id,
        status,
        date: take(Field::TimeOffDate)
            .map(|text| parse_date(Field::TimeOffDate, &text))
            .transpose()?,
        start_time: take(Field::TimeStart)
            .map(|text| parse_time(Field::TimeStart, &text))
            .transpose()?,
        end_time: take(Field::TimeEnd)
            .map(|text| parse_time(Field::TimeEnd, &text))
            .transpose()?,
        hours: take(Field::TimeOffHours),
        request_type: take(Field::TimeOffTypeName),
        login_id: take(Field::LoginId),
        first_name: take(Field::Firstname),
        last_name: take(Field::Lastname),
        user_category: take(Field::UserCategory),
        // Not guarded: a missing value fails like any unparseable date
        submitted_at: parse_date(
            Field::SubmittedDate,
            &take(Field::SubmittedDate).unwrap_or_default(),
        )?,
        deducted: is_yes(take(Field::Deducted).as_deref()),
        comment: take(Field::Comment),
    })
}

fn attribute(node: Node<'_, '_>, name: &str) -> Result<String, IntegrationError> {
    node.attribute(name).map(str::to_string).ok_or_else(|| {
        IntegrationError::invalid_xml(format!(
            "<{}> entry is missing the {} attribute",
            node.tag_name().name(),
            name
        ))
    })
}

/// Trimmed text of every field element present directly under `node`.
/// Missing, empty and whitespace-only elements are left out.
fn read_fields(node: Node<'_, '_>) -> HashMap<Field, String> {
    Field::ALL
        .iter()
        .filter_map(|field| {
            node.children()
                .find(|child| child.is_element() && child.tag_name().name() == field.tag())
                .and_then(element_text)
                .map(|text| (*field, text.to_string()))
        })
        .collect()
}

/// First non-blank text node of `element`, trimmed. Comments and
/// processing instructions ahead of it are skipped.
fn element_text<'a>(element: Node<'a, '_>) -> Option<&'a str> {
    element
        .children()
        .filter(Node::is_text)
        .filter_map(|child| child.text())
        .map(str::trim)
        .find(|text| !text.is_empty())
}

fn parse_date(field: Field, text: &str) -> Result<NaiveDate, IntegrationError> {
    let invalid = || IntegrationError::InvalidDate {
        field,
        value: text.to_string(),
    };

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
    {
        return Ok(date);
    }

    // A full timestamp in a date column still names a day
    let separator = text.get(10..).and_then(|rest| rest.chars().next());
    match (text.get(..10), separator) {
        (Some(date), Some('T' | ' ')) => {
            NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| invalid())
        }
        _ => Err(invalid()),
    }
}

fn parse_time(field: Field, text: &str) -> Result<TimeOffTime, IntegrationError> {
    if let Ok(time) = DateTime::parse_from_rfc3339(text) {
        return Ok(TimeOffTime::Offset(time));
    }

    if let Some(time) = OFFSET_TIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(text, format).ok())
    {
        return Ok(TimeOffTime::Offset(time));
    }

    NAIVE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(TimeOffTime::Naive)
        .ok_or_else(|| IntegrationError::InvalidTime {
            field,
            value: text.to_string(),
        })
}

fn is_yes(text: Option<&str>) -> bool {
    text.is_some_and(|text| text.eq_ignore_ascii_case("yes"))
}
