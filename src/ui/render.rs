use crate::ui::app::App;
use crate::ui::counter::CounterWidget;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{dashboard_regions, layout_regions};
use crate::ui::remote::RemoteValueView;
use ratatui::widgets::Clear;
use ratatui::Frame;

/// Draw one frame from the current state.
///
/// Pure with respect to the app: drawing never mutates state and never
/// issues requests, so any number of redraws leave the fetch count alone.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let config = app.config();

    frame.render_widget(Header::new().widget(app.reading(), &config.reading.url), header);
    frame.render_widget(Clear, body);

    let (remote_area, counter_area) = dashboard_regions(body);
    frame.render_widget(
        RemoteValueView::new(app.reading(), &config.reading.label, &config.reading.unit),
        remote_area,
    );
    frame.render_widget(
        CounterWidget::new(app.counter_title(), app.counter()),
        counter_area,
    );

    frame.render_widget(Footer, footer);
}
