/// The one interface the console knows how to drive.
pub trait Outlet {
    /// Plugs the device in and reports what it is doing.
    fn plug_in(&self) -> &'static str;
}
