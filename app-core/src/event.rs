/// A discrete change requested by the UI, applied to the owning state once
/// per frame.
pub trait AppEvent {
    type App;
    fn apply(&self, app: &mut Self::App) -> Result<(), String>;
}
