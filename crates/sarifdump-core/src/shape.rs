//! Structural check of a raw SARIF document before it is decoded.
//!
//! serde's derived struct decoding also accepts JSON arrays (members taken by
//! position), which would let `[]` load as an empty log. Every modelled record
//! must be a JSON object and every modelled list a JSON array; `null` members
//! are left for the decoder to judge.

use serde_json::Value;

struct Record {
    members: &'static [(&'static str, Member)],
}

enum Member {
    One(&'static Record),
    Many(&'static Record),
}

const LEAF: Record = Record { members: &[] };

const TOOL: Record = Record {
    members: &[("driver", Member::One(&LEAF))],
};

const PHYSICAL_LOCATION: Record = Record {
    members: &[
        ("artifactLocation", Member::One(&LEAF)),
        ("region", Member::One(&LEAF)),
    ],
};

const LOCATION: Record = Record {
    members: &[
        ("logicalLocations", Member::Many(&LEAF)),
        ("physicalLocation", Member::One(&PHYSICAL_LOCATION)),
        ("message", Member::One(&LEAF)),
    ],
};

const THREAD_FLOW_LOCATION: Record = Record {
    members: &[("location", Member::One(&LOCATION))],
};

const THREAD_FLOW: Record = Record {
    members: &[("locations", Member::Many(&THREAD_FLOW_LOCATION))],
};

const CODE_FLOW: Record = Record {
    members: &[("threadFlows", Member::Many(&THREAD_FLOW))],
};

const TAXON: Record = Record {
    members: &[("toolComponent", Member::One(&LEAF))],
};

const RESULT: Record = Record {
    members: &[
        ("message", Member::One(&LEAF)),
        ("locations", Member::Many(&LOCATION)),
        ("taxa", Member::Many(&TAXON)),
        ("codeFlows", Member::Many(&CODE_FLOW)),
    ],
};

const RUN: Record = Record {
    members: &[
        ("tool", Member::One(&TOOL)),
        ("results", Member::Many(&RESULT)),
    ],
};

const SARIF_LOG: Record = Record {
    members: &[("runs", Member::Many(&RUN))],
};

/// Check `value` against the shape of a SARIF log. On failure returns a message
/// naming the offending member, e.g. `runs[0].results[2]: expected an object, found an array`.
pub(crate) fn check_document(value: &Value) -> Result<(), String> {
    check_record(value, &SARIF_LOG, "document")
}

fn check_record(value: &Value, record: &Record, at: &str) -> Result<(), String> {
    let Value::Object(map) = value else {
        return Err(format!("{at}: expected an object, found {}", describe(value)));
    };

    for (name, member) in record.members {
        let child = match map.get(*name) {
            None | Some(Value::Null) => continue,
            Some(v) => v,
        };
        let child_at = if at == "document" {
            name.to_string()
        } else {
            format!("{at}.{name}")
        };
        match member {
            Member::One(inner) => check_record(child, inner, &child_at)?,
            Member::Many(inner) => {
                let Value::Array(items) = child else {
                    return Err(format!(
                        "{child_at}: expected an array, found {}",
                        describe(child)
                    ));
                };
                for (i, item) in items.iter().enumerate() {
                    check_record(item, inner, &format!("{child_at}[{i}]"))?;
                }
            }
        }
    }
    Ok(())
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
