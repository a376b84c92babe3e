//! Path evaluation over document trees.

use crate::types::{PathExpr, QueryResult, Step};
use docjson_tree::{children, Location, PathComponent};
use serde_json::Value;

/// Evaluates a path against a document.
///
/// Maintains a working set of `(location, node)` candidates, starting at
/// the root, and applies each step to every candidate in order. A step
/// that does not apply to a candidate's node kind drops that candidate;
/// the surviving set - in left-to-right, pre-order traversal order - is
/// the result.
pub fn eval<'a>(path: &PathExpr, doc: &'a Value) -> QueryResult<'a> {
    let mut nodes: Vec<&'a Value> = vec![doc];
    let mut locations: Vec<Location> = vec![Location::new()];

    for step in &path.steps {
        let mut next_nodes = Vec::new();
        let mut next_locations = Vec::new();

        for (&node, location) in nodes.iter().zip(locations.iter()) {
            apply_step(node, step, location, &mut next_nodes, &mut next_locations);
        }

        nodes = next_nodes;
        locations = next_locations;
    }

    QueryResult { nodes, locations }
}

fn apply_step<'a>(
    node: &'a Value,
    step: &Step,
    location: &Location,
    nodes: &mut Vec<&'a Value>,
    locations: &mut Vec<Location>,
) {
    match step {
        Step::Field(name) => {
            if let Value::Object(map) = node {
                if let Some(child) = map.get(name) {
                    nodes.push(child);
                    locations.push(extend(location, PathComponent::Key(name.clone())));
                }
            }
        }
        Step::Index(index) => {
            if let Value::Array(arr) = node {
                let resolved = if *index < 0 {
                    arr.len().checked_sub(index.unsigned_abs() as usize)
                } else {
                    Some(*index as usize)
                };
                if let Some(idx) = resolved {
                    if let Some(child) = arr.get(idx) {
                        nodes.push(child);
                        locations.push(extend(location, PathComponent::Index(idx)));
                    }
                }
            }
        }
        Step::Wildcard => {
            for (component, child) in children(node) {
                nodes.push(child);
                locations.push(extend(location, component));
            }
        }
        Step::Descend(name) => descend(node, name, location, nodes, locations),
    }
}

/// Pre-order recursive descent: the named member of the current node
/// first, then each child in document order.
fn descend<'a>(
    node: &'a Value,
    name: &str,
    location: &Location,
    nodes: &mut Vec<&'a Value>,
    locations: &mut Vec<Location>,
) {
    if let Value::Object(map) = node {
        if let Some(child) = map.get(name) {
            nodes.push(child);
            locations.push(extend(location, PathComponent::Key(name.to_string())));
        }
    }
    for (component, child) in children(node) {
        descend(child, name, &extend(location, component), nodes, locations);
    }
}

fn extend(location: &Location, component: PathComponent) -> Location {
    let mut out = location.clone();
    out.push(component);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> Value {
        json!({
            "a": {"b": [1, 2, 3]},
            "c": [{"b": 10}, {"x": 20}]
        })
    }

    fn run(path: &str, doc: &Value) -> Vec<Value> {
        PathExpr::parse(path)
            .unwrap()
            .eval(doc)
            .nodes
            .into_iter()
            .cloned()
            .collect()
    }

    #[test]
    fn field_and_index_steps() {
        let doc = doc();
        assert_eq!(run("$.a.b[1]", &doc), vec![json!(2)]);
        assert_eq!(run("$.a.b[-1]", &doc), vec![json!(3)]);
        assert_eq!(run("$.c[1].x", &doc), vec![json!(20)]);
        assert_eq!(run("$", &doc), vec![doc.clone()]);
    }

    #[test]
    fn mismatched_steps_drop_candidates_silently() {
        let doc = doc();
        assert!(run("$.a.b.c", &doc).is_empty()); // field on array
        assert!(run("$.a[0]", &doc).is_empty()); // index on object
        assert!(run("$.a.b[3]", &doc).is_empty()); // out of range
        assert!(run("$.a.b[-4]", &doc).is_empty());
        assert!(run("$.nope", &doc).is_empty());
    }

    #[test]
    fn wildcard_preserves_document_order() {
        let doc = json!({"a": {"x": 1, "y": 2}});
        assert_eq!(run("$.a.*", &doc), vec![json!(1), json!(2)]);
        assert_eq!(run("$.a[*]", &doc), vec![json!(1), json!(2)]);

        let arr = json!({"a": [3, 1, 2]});
        assert_eq!(run("$.a[*]", &arr), vec![json!(3), json!(1), json!(2)]);
        assert!(run("$.a[*].x", &arr).is_empty());
    }

    #[test]
    fn descend_matches_in_pre_order() {
        let doc = doc();
        assert_eq!(run("$..b", &doc), vec![json!([1, 2, 3]), json!(10)]);
        assert_eq!(run("$..x", &doc), vec![json!(20)]);
        assert!(run("$..zzz", &doc).is_empty());
    }

    #[test]
    fn locations_parallel_the_nodes() {
        let doc = doc();
        let path = PathExpr::parse("$..b").unwrap();
        let result = path.eval(&doc);
        assert_eq!(result.len(), 2);
        assert_eq!(
            result.locations[0],
            vec![PathComponent::Key("a".into()), PathComponent::Key("b".into())]
        );
        assert_eq!(
            result.locations[1],
            vec![
                PathComponent::Key("c".into()),
                PathComponent::Index(0),
                PathComponent::Key("b".into())
            ]
        );
        assert_eq!(result.first(), Some(&json!([1, 2, 3])));
    }
}
