use serde::de::DeserializeOwned;

/// Where in the document decoding stopped, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathError {
    pub at: String,
    pub message: String,
}

/// Deserialize JSON with document-path context in error messages.
pub fn from_json_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, PathError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| PathError {
        at: err.path().to_string(),
        message: err.into_inner().to_string(),
    })
}

/// Deserialize YAML with document-path context in error messages.
pub fn from_yaml_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, PathError> {
    let de = serde_yaml::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| PathError {
        at: err.path().to_string(),
        message: err.into_inner().to_string(),
    })
}
