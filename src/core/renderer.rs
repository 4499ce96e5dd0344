/// Renderer trait for drawing a game's view using Ratatui
pub trait Renderer<V> {
    /// Render the view into the Ratatui frame
    fn render(frame: &mut ratatui::Frame, view: &V);
}
