/// Something that happened: an attempt outcome or a restart.
pub trait Intent: Send + 'static {}
