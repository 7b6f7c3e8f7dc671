use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateInvestorRequest {
    pub code: String,
    pub name: String,
}
