#[derive(Debug)]
pub struct CustomError {
    pub(crate) message: String,
}
