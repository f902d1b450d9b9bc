//! RACI definition loading.
//!
//! The YAML document is read into a generic `serde_yaml::Value` first so that
//! missing or mistyped top-level keys produce specific errors instead of a
//! generic deserialization failure.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;
use serde_yaml::Value;

use crate::error_handling::RaciError;

/// Roles and tasks making up a RACI matrix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RaciDefinition {
    /// Column headings, in order
    pub roles: Vec<String>,
    /// One entry per matrix row, in order
    pub tasks: Vec<RaciTask>,
}

/// One task (matrix row).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RaciTask {
    /// Task name shown in the first column
    pub name: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Role name to RACI code, as written in the YAML
    pub assignments: BTreeMap<String, String>,
}

/// Loads a RACI definition from a YAML file.
///
/// # Errors
///
/// - `InputNotFound` if the file does not exist
/// - `Parse` for YAML syntax errors
/// - `MissingKeys` / `NotLists` / `InvalidTask` for structural problems
pub fn load_definition(path: &Path) -> Result<RaciDefinition, RaciError> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => RaciError::InputNotFound(path.to_path_buf()),
        _ => RaciError::Io(e),
    })?;
    let definition = parse_definition(&text)?;
    debug!(
        "Loaded {} role(s) and {} task(s) from {}",
        definition.roles.len(),
        definition.tasks.len(),
        path.display()
    );
    Ok(definition)
}

/// Parses a RACI definition from YAML text.
///
/// An empty document is treated as an empty mapping. Scalar role names and
/// assignment codes (numbers, booleans) are converted to their text form.
///
/// # Example
///
/// ```
/// use ir_toolkit::raci::parse_definition;
///
/// let def = parse_definition(
///     "roles: [IR Lead, IT Team]\n\
///      tasks:\n  - name: Incident Logging\n    assignments: {IR Lead: A, IT Team: R}\n",
/// )
/// .unwrap();
/// assert_eq!(def.roles, vec!["IR Lead", "IT Team"]);
/// assert_eq!(def.tasks[0].assignments["IT Team"], "R");
/// ```
pub fn parse_definition(text: &str) -> Result<RaciDefinition, RaciError> {
    let doc: Value = if text.trim().is_empty() {
        Value::Null
    } else {
        serde_yaml::from_str(text)?
    };

    let (Some(roles), Some(tasks)) = (doc.get("roles"), doc.get("tasks")) else {
        return Err(RaciError::MissingKeys);
    };
    let (Some(roles), Some(tasks)) = (roles.as_sequence(), tasks.as_sequence()) else {
        return Err(RaciError::NotLists);
    };

    let roles = roles.iter().map(scalar_to_string).collect();
    let tasks = tasks
        .iter()
        .enumerate()
        .map(|(index, task)| parse_task(index + 1, task))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RaciDefinition { roles, tasks })
}

fn parse_task(number: usize, task: &Value) -> Result<RaciTask, RaciError> {
    if !task.is_mapping() {
        return Err(RaciError::InvalidTask(number));
    }

    let name = task.get("name").map(scalar_to_string).unwrap_or_default();
    let description = task
        .get("description")
        .filter(|d| !d.is_null())
        .map(scalar_to_string);

    let assignments = match task.get("assignments") {
        None | Some(Value::Null) => BTreeMap::new(),
        Some(Value::Mapping(map)) => map
            .iter()
            .map(|(role, code)| (scalar_to_string(role), scalar_to_string(code)))
            .collect(),
        Some(_) => return Err(RaciError::InvalidTask(number)),
    };

    Ok(RaciTask {
        name,
        description,
        assignments,
    })
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}
