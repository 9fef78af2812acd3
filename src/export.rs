use tracing::debug;

use crate::{
    Error, Settings, binding_error,
    consts::{DEFAULT_BINDING, JS_RESERVED_WORDS},
};

impl Settings {
    /// Serialize the record as compact JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|e| Error::SerializeError(e.to_string()))
    }

    /// Render the record as a page script assigning it to a global variable.
    ///
    /// The output has the form `var <binding> = {...};` followed by a newline,
    /// and can be served as-is from a `<script>` tag so that other scripts on
    /// the page read the same values Rust code gets from [`crate::config`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tweetwall_config::config;
    ///
    /// let script = config().to_script("wall").unwrap();
    /// assert!(script.starts_with("var wall = {\"debug\":false,"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `binding` is not a valid JavaScript identifier or is a reserved word
    /// - Serialization fails
    ///
    pub fn to_script(&self, binding: &str) -> Result<String, Error> {
        validate_binding(binding)?;
        let json = self.to_json()?;
        debug!("Rendering settings script for binding {}", binding);
        Ok(format!("var {} = {};\n", binding, json))
    }

    /// Render the record bound to the default `config` global.
    pub fn to_default_script(&self) -> Result<String, Error> {
        self.to_script(DEFAULT_BINDING)
    }
}

fn validate_binding(binding: &str) -> Result<(), Error> {
    let mut chars = binding.chars();
    let Some(first) = chars.next() else {
        return Err(binding_error!("binding name is empty"));
    };
    let is_part = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '$';
    if first.is_ascii_digit() || !is_part(first) || !chars.all(is_part) {
        debug!("Rejected binding name: {:?}", binding);
        return Err(binding_error!("{:?} is not a JavaScript identifier", binding));
    }
    if JS_RESERVED_WORDS.contains(&binding) {
        debug!("Rejected reserved binding name: {:?}", binding);
        return Err(binding_error!("{:?} is a reserved word", binding));
    }
    Ok(())
}
