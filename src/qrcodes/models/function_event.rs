use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    pub http_method: String,
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl FunctionEvent {
    pub fn is_preflight(&self) -> bool {
        self.http_method.eq_ignore_ascii_case("OPTIONS")
    }
}
