use serde_json::{Map, Value};

/// JSON-shaped site configuration addressed by dotted paths (e.g. `c4.boxWidth`).
#[derive(Debug, Clone, PartialEq)]
pub struct C4Config(Value);

impl Default for C4Config {
    fn default() -> Self {
        Self::empty_object()
    }
}

impl C4Config {
    pub fn empty_object() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    fn get(&self, dotted_path: &str) -> Option<&Value> {
        dotted_path
            .split('.')
            .try_fold(&self.0, |cur, segment| cur.as_object()?.get(segment))
    }

    /// Reads an unsigned integer, accepting numeric strings as well.
    pub fn get_u64(&self, dotted_path: &str) -> Option<u64> {
        match self.get(dotted_path)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        }
    }

    /// Stores `value` at `dotted_path`, replacing any non-object found along the way.
    pub fn set_value(&mut self, dotted_path: &str, value: Value) {
        let (parents, leaf) = match dotted_path.rsplit_once('.') {
            Some((parents, leaf)) => (Some(parents), leaf),
            None => (None, dotted_path),
        };

        let mut map = object_mut(&mut self.0);
        for segment in parents.into_iter().flat_map(|p| p.split('.')) {
            map = object_mut(map.entry(segment).or_insert(Value::Null));
        }
        map.insert(leaf.to_string(), value);
    }

    /// Layers `overrides` on top of this config. Objects merge key by key; any other value
    /// replaces what was there.
    pub fn merge(&mut self, overrides: Value) {
        merge_into(&mut self.0, overrides);
    }
}

fn object_mut(slot: &mut Value) -> &mut Map<String, Value> {
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(map) => map,
        _ => unreachable!("slot was just made an object"),
    }
}

fn merge_into(target: &mut Value, overrides: Value) {
    let Value::Object(incoming) = overrides else {
        *target = overrides;
        return;
    };
    let Value::Object(existing) = target else {
        *target = Value::Object(incoming);
        return;
    };
    for (key, value) in incoming {
        match existing.get_mut(&key) {
            Some(slot) => merge_into(slot, value),
            None => {
                existing.insert(key, value);
            }
        }
    }
}
