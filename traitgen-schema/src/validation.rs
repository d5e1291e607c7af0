//! Schema validation utilities.
//!
//! This module checks a schema document for problems that would make the
//! generated package inconsistent: colliding module names, references to
//! missing definitions and reference cycles between definitions.

use crate::classifier::classify_definition;
use crate::error::{Result, SchemaError};
use crate::types::{Definition, DefinitionKind, PropertySpec, SchemaDocument, module_name};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;

/// What to do when definitions reference each other in a cycle.
///
/// Resolution itself always terminates because a reference only inspects
/// the declared kind of its target; cycles matter because the generated
/// modules would import each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePolicy {
    /// Accept cycles silently.
    Allow,
    /// Accept cycles and log each one.
    #[default]
    Warn,
    /// Fail with `SchemaError::CyclicReference`.
    Reject,
}

impl CyclePolicy {
    /// Parses a cycle policy from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "allow" => Some(Self::Allow),
            "warn" => Some(Self::Warn),
            "reject" | "deny" => Some(Self::Reject),
            _ => None,
        }
    }
}

impl fmt::Display for CyclePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Allow => "allow",
            Self::Warn => "warn",
            Self::Reject => "reject",
        })
    }
}

/// Reference graph between definitions, keyed by definition name.
pub type ReferenceGraph = BTreeMap<String, BTreeSet<String>>;

/// Validates a schema document.
///
/// # Arguments
/// * `document` - The document to validate
/// * `policy` - How reference cycles are handled
///
/// # Returns
/// The reference cycles found (empty when there are none).
///
/// # Errors
/// Returns `SchemaError` if module names collide, an object definition
/// cannot be read, a reference names a missing definition, or a cycle is
/// found under `CyclePolicy::Reject`.
pub fn validate_schema(document: &SchemaDocument, policy: CyclePolicy) -> Result<Vec<Vec<String>>> {
    validate_module_names(document)?;
    let graph = reference_graph(document)?;
    let cycles = find_cycles(&graph);

    for cycle in &cycles {
        let path = cycle.join(" -> ");
        match policy {
            CyclePolicy::Allow => {}
            CyclePolicy::Warn => tracing::warn!(%path, "circular definition reference"),
            CyclePolicy::Reject => return Err(SchemaError::CyclicReference { path }),
        }
    }

    Ok(cycles)
}

/// Checks that lowercased definition names are unique.
///
/// # Errors
/// Returns `SchemaError::ModuleNameCollision` for the first collision found.
pub fn validate_module_names(document: &SchemaDocument) -> Result<()> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for name in document.names() {
        let module = module_name(name);
        if let Some(first) = seen.get(&module) {
            return Err(SchemaError::ModuleNameCollision {
                module,
                first: (*first).to_string(),
                second: name.to_string(),
            });
        }
        seen.insert(module, name);
    }

    Ok(())
}

/// Checks that no definition maps to one of the `reserved` module names.
///
/// # Errors
/// Returns `SchemaError::ReservedModuleName` for the first definition, in
/// name order, whose module name is reserved.
pub fn validate_reserved_modules<'r>(
    document: &SchemaDocument,
    reserved: impl IntoIterator<Item = &'r str>,
) -> Result<()> {
    let reserved: HashSet<&str> = reserved.into_iter().collect();

    for name in document.names() {
        let module = module_name(name);
        if reserved.contains(module.as_str()) {
            return Err(SchemaError::ReservedModuleName {
                name: name.to_string(),
                module,
            });
        }
    }

    Ok(())
}

/// Builds the reference graph of all object definitions.
///
/// Definitions of any other declared kind have no outgoing edges; their
/// kind is reported when they are classified.
///
/// # Errors
/// Returns `SchemaError` if an object definition cannot be read or one of
/// its references names a missing definition.
pub fn reference_graph(document: &SchemaDocument) -> Result<ReferenceGraph> {
    let mut graph = ReferenceGraph::new();

    for raw in document.definitions() {
        let mut edges = BTreeSet::new();
        let is_object = raw.declared_kind().and_then(DefinitionKind::parse)
            == Some(DefinitionKind::Object);

        if is_object {
            if let Definition::Object(def) = classify_definition(raw)? {
                for (prop_name, spec) in &def.properties {
                    let context = format!("{}.{}", def.name, prop_name);
                    collect_references(spec, &context, document, &mut edges)?;
                }
            }
        }
        graph.insert(raw.name.clone(), edges);
    }

    Ok(graph)
}

fn collect_references(
    spec: &PropertySpec,
    context: &str,
    document: &SchemaDocument,
    edges: &mut BTreeSet<String>,
) -> Result<()> {
    match spec {
        PropertySpec::Typed(typed) => {
            if let Some(items) = &typed.items {
                collect_references(items, &format!("{context}.items"), document, edges)?;
            }
        }
        PropertySpec::Reference(reference) => {
            if !document.has_definition(&reference.target) {
                return Err(SchemaError::UnknownReference {
                    context: context.to_string(),
                    target: reference.target.clone(),
                });
            }
            edges.insert(reference.target.clone());
        }
        PropertySpec::Union(union) => {
            for (i, alt) in union.alternatives.iter().enumerate() {
                collect_references(alt, &format!("{context}.oneOf[{i}]"), document, edges)?;
            }
        }
    }
    Ok(())
}

/// Finds reference cycles in a graph.
///
/// Each cycle is reported once, as the path from the first node reached on
/// the cycle back to itself (a self reference is `[A, A]`). Traversal is in
/// name order, so the result is deterministic.
#[must_use]
pub fn find_cycles(graph: &ReferenceGraph) -> Vec<Vec<String>> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Mark {
        Active,
        Done,
    }

    fn visit<'g>(
        node: &'g str,
        graph: &'g ReferenceGraph,
        marks: &mut HashMap<&'g str, Mark>,
        stack: &mut Vec<&'g str>,
        cycles: &mut Vec<Vec<String>>,
    ) {
        marks.insert(node, Mark::Active);
        stack.push(node);

        if let Some(edges) = graph.get(node) {
            for next in edges {
                match marks.get(next.as_str()) {
                    Some(Mark::Active) => {
                        if let Some(start) = stack.iter().position(|n| *n == next.as_str()) {
                            let mut cycle: Vec<String> =
                                stack[start..].iter().map(|n| (*n).to_string()).collect();
                            cycle.push(next.clone());
                            cycles.push(cycle);
                        }
                    }
                    Some(Mark::Done) => {}
                    None => visit(next, graph, marks, stack, cycles),
                }
            }
        }

        stack.pop();
        marks.insert(node, Mark::Done);
    }

    let mut marks = HashMap::new();
    let mut stack = Vec::new();
    let mut cycles = Vec::new();

    for node in graph.keys() {
        if !marks.contains_key(node.as_str()) {
            visit(node, graph, &mut marks, &mut stack, &mut cycles);
        }
    }

    cycles
}
