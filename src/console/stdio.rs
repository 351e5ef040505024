#[derive(Default, Clone)]
pub struct Detached;

pub struct Attached<R, W> {
    pub(crate) reader: R,
    pub(crate) writer: W,
}
