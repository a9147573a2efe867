use std::collections::HashMap;

use log::warn;

/// The location the driver reports for a uniform that doesn't exist (or was optimised out).
pub const NOT_FOUND: i32 = -1;

/// Remembers uniform locations by name so each one is only queried from the driver once.
///
/// Missing uniforms are remembered too: they resolve to `None` on every later call without
/// asking the driver again, and the warning about them is only logged the first time.
#[derive(Debug, Default)]
pub struct UniformCache {
    locations: HashMap<String, Option<i32>>,
}

impl UniformCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve<F, E>(&mut self, name: &str, lookup: F) -> Result<Option<i32>, E>
    where
        F: FnOnce(&str) -> Result<i32, E>,
    {
        if let Some(location) = self.locations.get(name) {
            return Ok(*location);
        }

        let location = match lookup(name)? {
            NOT_FOUND => {
                warn!("uniform `{}` does not exist in the program (unused uniforms are stripped)", name);
                None
            }
            location => Some(location),
        };

        self.locations.insert(name.to_owned(), location);
        Ok(location)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
