#[derive(Clone, Debug)]
pub struct VerifyNifQuery {
    candidate: String,
}

impl VerifyNifQuery {
    pub fn new(candidate: String) -> Self {
        Self { candidate }
    }

    pub fn candidate(&self) -> &str {
        &self.candidate
    }
}
