//! Parsing of guest and summary payloads received from a server.
//!
//! These are the inverse of the registry's serialized forms: parsing a
//! serialized [`GuestRecord`] or [`Summary`] gives back an equal value.
//! Rejections are logged with the offending value and returned as a
//! [`PayloadError`] naming the failed check.

use serde_json::{Map, Number, Value};

use crate::{AdditionalGuest, GuestList, GuestRecord, Host, HostSummary, PayloadError, Summary};

type Result<T> = std::result::Result<T, PayloadError>;

/// Parses a guest record.
pub fn parse_guest(value: &Value) -> Result<GuestRecord> {
    guest_from_value(value).inspect_err(|err| {
        tracing::warn!(error = %err, value = %value, "rejected guest payload");
    })
}

/// Parses a head-count summary.
pub fn parse_summary(value: &Value) -> Result<Summary> {
    summary_from_value(value).inspect_err(|err| {
        tracing::warn!(error = %err, value = %value, "rejected summary payload");
    })
}

/// Parses a guest list response: `{"guests": [..], "summary": {..}}`.
pub fn parse_guest_list(value: &Value) -> Result<GuestList> {
    let map = response_record(value)?;
    let (Some(guests), Some(summary)) = (map.get("guests"), map.get("summary")) else {
        let field = if map.contains_key("guests") {
            "summary"
        } else {
            "guests"
        };
        return Err(missing(value, field));
    };

    let guests = guests.as_array().ok_or_else(|| {
        tracing::warn!(value = %guests, "response guests not an array");
        PayloadError::NotAnArray { field: "guests" }
    })?;
    let summary = parse_summary(summary)?;
    let guests = guests.iter().map(parse_guest).collect::<Result<Vec<_>>>()?;

    Ok(GuestList { guests, summary })
}

/// Parses a single-guest response: `{"guest": {..}}`.
pub fn parse_loaded_guest(value: &Value) -> Result<GuestRecord> {
    let guest = response_record(value)?
        .get("guest")
        .ok_or_else(|| missing(value, "guest"))?;
    parse_guest(guest)
}

/// Checks a confirmation response such as `{"saved": true}`.
pub fn parse_confirmation(value: &Value, field: &'static str) -> Result<()> {
    let confirmed = response_record(value)?
        .get(field)
        .and_then(Value::as_bool)
        .ok_or_else(|| missing(value, field))?;
    if !confirmed {
        tracing::warn!(value = %value, field, "response not confirmed");
        return Err(PayloadError::NotConfirmed { field });
    }
    Ok(())
}

fn response_record(value: &Value) -> Result<&Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        tracing::warn!(value = %value, "response is not a record");
        PayloadError::NotARecord
    })
}

fn missing(value: &Value, field: &'static str) -> PayloadError {
    tracing::warn!(value = %value, field, "response missing field");
    PayloadError::ResponseMissingField { field }
}

fn guest_from_value(value: &Value) -> Result<GuestRecord> {
    let map = value.as_object().ok_or(PayloadError::NotAGuest)?;

    let name = map
        .get("name")
        .and_then(Value::as_str)
        .ok_or(PayloadError::GuestMissingField { field: "name" })?;

    let host = map
        .get("host")
        .and_then(Value::as_str)
        .and_then(|host| host.parse::<Host>().ok())
        .ok_or(PayloadError::InvalidHost)?;

    let is_family = map
        .get("isFamily")
        .and_then(Value::as_bool)
        .ok_or(PayloadError::GuestMissingField { field: "isFamily" })?;

    let dietary = map
        .get("dietary")
        .and_then(Value::as_str)
        .ok_or(PayloadError::GuestMissingField { field: "dietary" })?;

    // An absent field is an open answer; a present one must be well formed.
    let additional = match map.get("additional") {
        None => AdditionalGuest::Unknown,
        Some(additional) => companion_from_value(additional)?,
    };

    Ok(GuestRecord::new(name, host, is_family)
        .with_dietary(dietary)
        .with_additional(additional))
}

fn companion_from_value(value: &Value) -> Result<AdditionalGuest> {
    let map = value.as_object().ok_or(PayloadError::NotABroughtGuest)?;

    match map.get("kind").and_then(Value::as_str) {
        Some("none") => Ok(AdditionalGuest::NotBringing),
        Some("brought") => {
            let name = map
                .get("name")
                .and_then(Value::as_str)
                .ok_or(PayloadError::CompanionMissingField { field: "name" })?;
            let dietary = map
                .get("dietary")
                .and_then(Value::as_str)
                .ok_or(PayloadError::CompanionMissingField { field: "dietary" })?;
            Ok(AdditionalGuest::bringing(name, dietary))
        }
        _ => Err(PayloadError::UnknownCompanionKind),
    }
}

/// Raw `[min, max, famNum]` numbers for one host.
type RawCounts<'a> = [&'a Number; 3];

fn summary_from_value(value: &Value) -> Result<Summary> {
    let map = value.as_object().ok_or(PayloadError::NotASummary)?;

    let molly = map.get("Molly").and_then(Value::as_object);
    let james = map.get("James").and_then(Value::as_object);
    let (Some(molly), Some(james)) = (molly, james) else {
        return Err(PayloadError::SummaryMissingHost);
    };

    let molly = raw_counts(molly, Host::Molly)?;
    let james = raw_counts(james, Host::James)?;

    let molly = integral_counts(molly)?;
    let james = integral_counts(james)?;

    Ok(Summary::new(ordered_counts(molly)?, ordered_counts(james)?))
}

fn raw_counts(map: &Map<String, Value>, host: Host) -> Result<RawCounts<'_>> {
    let number = |key: &str| match map.get(key) {
        Some(Value::Number(n)) => Some(n),
        _ => None,
    };
    match (number("min"), number("max"), number("famNum")) {
        (Some(min), Some(max), Some(fam_num)) => Ok([min, max, fam_num]),
        _ => Err(PayloadError::SummaryMissingCounts {
            host: host.as_str(),
        }),
    }
}

fn integral_counts(raw: RawCounts<'_>) -> Result<[i128; 3]> {
    let [min, max, fam_num] = raw.map(integral);
    match (min, max, fam_num) {
        (Some(min), Some(max), Some(fam_num)) => Ok([min, max, fam_num]),
        _ => Err(PayloadError::SummaryNotIntegers),
    }
}

/// Integer value of a JSON number. Floats with no fractional part (`2.0`)
/// count as integers.
fn integral(number: &Number) -> Option<i128> {
    if let Some(n) = number.as_i64() {
        return Some(n.into());
    }
    if let Some(n) = number.as_u64() {
        return Some(n.into());
    }
    let f = number.as_f64()?;
    // Beyond this magnitude the float cannot be converted without loss.
    (f.fract() == 0.0 && f.abs() < 9.0e15).then_some(f as i128)
}

fn ordered_counts([min, max, fam_num]: [i128; 3]) -> Result<HostSummary> {
    if !(0 <= fam_num && fam_num <= min && min <= max) {
        return Err(PayloadError::SummaryOutOfOrder);
    }
    let count = |n: i128| u64::try_from(n).map_err(|_| PayloadError::SummaryOutOfOrder);
    Ok(HostSummary::new(count(min)?, count(max)?, count(fam_num)?))
}
