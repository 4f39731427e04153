use serde::Deserialize;

#[derive(Deserialize)]
pub struct StartSearchRequest {
    #[serde(rename = "filterText")]
    pub filter_text: String,
    pub threads: Option<usize>,
}

#[derive(Deserialize)]
pub struct StopSearchRequest {
    #[serde(rename = "searchId")]
    pub search_id: String,
}

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub seed: String,
    pub deck: Option<String>,
    pub stake: Option<String>,
}
