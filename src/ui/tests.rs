use std::sync::mpsc;
use std::time::{Duration, Instant};

use indexmap::IndexMap;
use insta::assert_snapshot;
use ratatui::crossterm::event::{
	Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::TestBackend};

use super::*;
use crate::data::{Country, Currency, LoadError, LoadUpdate};

fn country(common: &str, official: &str, population: u64, area: f64, language: &str) -> Country {
	let mut country = Country::new(common, official);
	country.capital = vec![format!("{common} City")];
	country.population = population;
	country.region = "Europe".to_string();
	country.area = Some(area);
	country.languages = Some(IndexMap::from([(
		language[..3].to_lowercase(),
		language.to_string(),
	)]));
	country.currencies = Some(IndexMap::from([(
		"EUR".to_string(),
		Currency {
			name: "Euro".to_string(),
			symbol: Some("€".to_string()),
		},
	)]));
	country
}

fn sample_countries() -> Vec<Country> {
	vec![
		country("France", "French Republic", 67_391_582, 551_695.0, "French"),
		country("Germany", "Federal Republic of Germany", 83_240_525, 357_114.0, "German"),
	]
}

fn loaded_app() -> App<'static> {
	let mut app = App::new();
	app.set_countries(sample_countries());
	app
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		let outcome = app.handle_key(key(KeyCode::Char(ch)));
		assert!(outcome.is_none());
	}
}

fn render(app: &mut App<'_>) -> String {
	render_sized(app, 100, 30)
}

fn render_sized(app: &mut App<'_>, width: u16, height: u16) -> String {
	let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	terminal.backend().to_string()
}

fn names(app: &App<'_>) -> Vec<String> {
	app.filtered_countries()
		.map(|country| country.common_name().to_string())
		.collect()
}

#[test]
fn shows_loading_indicator_until_data_arrives() {
	let mut app = App::new();
	let (tx, rx) = mpsc::channel();
	app.set_load_updates(rx);

	assert_eq!(app.view_state(), ViewState::Loading);
	let view = render(&mut app);
	assert!(view.contains("Loading countries..."));
	assert!(!view.contains("0 countries"));

	tx.send(LoadUpdate {
		countries: sample_countries(),
	})
	.expect("send");
	app.pump_load_updates();

	assert!(!app.is_loading());
	assert_eq!(app.countries.len(), 2);
	assert_eq!(app.view_state(), ViewState::Prompt);
	let view = render(&mut app);
	assert!(view.contains("Type a country name to start searching"));
	assert!(!view.contains("Loading countries..."));
}

#[test]
fn loader_that_vanishes_leaves_empty_list() {
	let mut app = App::new();
	let (tx, rx) = mpsc::channel::<LoadUpdate>();
	app.set_load_updates(rx);
	drop(tx);

	app.pump_load_updates();
	assert!(!app.is_loading());
	assert!(app.countries.is_empty());
}

#[test]
fn failed_fetch_ends_loading_with_no_countries() {
	let mut app = App::new();
	app.start_loading(|| -> Result<Vec<Country>, LoadError> { Err(LoadError::Status(500)) });

	let deadline = Instant::now() + Duration::from_secs(5);
	while app.is_loading() && Instant::now() < deadline {
		app.pump_load_updates();
		std::thread::sleep(Duration::from_millis(5));
	}

	assert!(!app.is_loading());
	assert!(app.countries.is_empty());
	type_text(&mut app, "fra");
	assert_eq!(app.view_state(), ViewState::NoResults);
}

#[test]
fn typing_filters_and_clearing_returns_to_prompt() {
	let mut app = loaded_app();

	type_text(&mut app, "fra");
	assert_eq!(names(&app), vec!["France"]);
	let view = render(&mut app);
	assert!(view.contains("France"));
	assert!(!view.contains("Germany"));

	for _ in 0..3 {
		app.handle_key(key(KeyCode::Backspace));
	}
	type_text(&mut app, "xyz");
	assert_eq!(app.view_state(), ViewState::NoResults);
	assert!(render(&mut app).contains("No countries found"));

	for _ in 0..3 {
		app.handle_key(key(KeyCode::Backspace));
	}
	assert_eq!(app.query(), "");
	assert_eq!(app.view_state(), ViewState::Prompt);
	assert!(render(&mut app).contains("Type a country name to start searching"));
}

#[test]
fn filtering_ignores_case() {
	let mut app = loaded_app();
	type_text(&mut app, "GER");
	assert_eq!(names(&app), vec!["Germany"]);
}

#[test]
fn whitespace_query_matches_nothing() {
	let mut app = loaded_app();
	app.set_query("  ");
	assert_eq!(app.filtered_len(), 0);
	assert_eq!(app.view_state(), ViewState::NoResults);
}

#[test]
fn cards_show_grouped_population_and_languages() {
	let mut app = loaded_app();
	app.set_query("a");
	let view = render(&mut app);
	assert!(view.contains("67,391,582"));
	assert!(view.contains("83,240,525"));
	assert!(view.contains("French"));
	assert!(view.contains("German"));
	assert!(view.contains("2/2 matches"));
}

#[test]
fn modal_shows_country_details() {
	let mut app = loaded_app();
	app.set_query("fra");
	app.handle_key(key(KeyCode::Enter));
	assert_eq!(app.selected().map(Country::common_name), Some("France"));

	let view = render(&mut app);
	assert!(view.contains("French Republic"));
	assert!(view.contains("67,391,582"));
	assert!(view.contains("551,695 km²"));
	assert!(view.contains("Euro"));
	assert!(view.contains("[X]"));
}

#[test]
fn clicking_inside_modal_keeps_it_open() {
	let mut app = loaded_app();
	app.set_query("fra");
	app.handle_key(key(KeyCode::Enter));
	render(&mut app);

	let modal = app.hits.modal.expect("modal area");
	app.handle_mouse(click(modal.x + 2, modal.y + 3));
	assert!(app.is_modal_open());
}

#[test]
fn overlay_click_close_button_and_escape_close_modal() {
	let mut app = loaded_app();
	app.set_query("fra");

	app.handle_key(key(KeyCode::Enter));
	render(&mut app);
	app.handle_mouse(click(0, 0));
	assert!(!app.is_modal_open());

	app.handle_key(key(KeyCode::Enter));
	render(&mut app);
	let close = app.hits.close_button.expect("close area");
	app.handle_mouse(click(close.x + 1, close.y));
	assert!(!app.is_modal_open());

	app.handle_key(key(KeyCode::Enter));
	let outcome = app.handle_key(key(KeyCode::Esc));
	assert!(outcome.is_none());
	assert!(!app.is_modal_open());
}

#[test]
fn clicking_a_card_opens_its_details() {
	let mut app = loaded_app();
	app.set_query("a");
	render(&mut app);

	let (area, _) = app
		.hits
		.cards
		.iter()
		.copied()
		.find(|(_, position)| *position == 1)
		.expect("second card");
	app.handle_mouse(click(area.x + 1, area.y + 1));
	assert_eq!(app.selected().map(Country::common_name), Some("Germany"));
}

#[test]
fn typing_is_ignored_while_modal_is_open() {
	let mut app = loaded_app();
	app.set_query("fra");
	app.handle_key(key(KeyCode::Enter));

	app.handle_key(key(KeyCode::Char('x')));
	assert_eq!(app.query(), "fra");
	assert!(app.is_modal_open());
}

#[test]
fn enter_in_modal_accepts_country() {
	let mut app = loaded_app();
	app.set_query("ger");
	app.handle_key(key(KeyCode::Enter));

	let outcome = app.handle_key(key(KeyCode::Enter)).expect("outcome");
	assert!(outcome.accepted);
	assert_eq!(outcome.query, "ger");
	assert_eq!(
		outcome.selection.as_ref().map(Country::common_name),
		Some("Germany")
	);
}

#[test]
fn escape_without_modal_exits_unaccepted() {
	let mut app = loaded_app();
	type_text(&mut app, "fr");
	let outcome = app.handle_key(key(KeyCode::Esc)).expect("outcome");
	assert!(!outcome.accepted);
	assert_eq!(outcome.query, "fr");
	assert!(outcome.selection.is_none());
}

#[test]
fn tab_moves_highlight_within_results() {
	let mut app = loaded_app();
	app.set_query("a");
	app.handle_key(key(KeyCode::Tab));
	app.handle_key(key(KeyCode::Tab));
	assert_eq!(app.cursor, 1);
	app.handle_key(key(KeyCode::BackTab));
	assert_eq!(app.cursor, 0);

	app.handle_key(key(KeyCode::Tab));
	app.handle_key(key(KeyCode::Char('n')));
	assert_eq!(app.cursor, 0);
}

#[test]
fn prompt_frame() {
	let mut app = loaded_app();
	assert_snapshot!(render_sized(&mut app, 60, 11), @r#"
"                      Country Explorer                      "
"    Discover information about countries around the world   "
" ╭────────────────────────────────────────────────────────╮ "
" │ Search for a country...                     2 countries│ "
" ╰────────────────────────────────────────────────────────╯ "
"                                                            "
"                                                            "
"           Type a country name to start searching           "
"                                                            "
"                                                            "
" ↑↓/tab move · enter details · esc quit         0/2 matches "
"#);
}

#[test]
fn no_results_frame() {
	let mut app = loaded_app();
	app.set_query("xyz");
	assert_snapshot!(render_sized(&mut app, 60, 11), @r#"
"                      Country Explorer                      "
"    Discover information about countries around the world   "
" ╭────────────────────────────────────────────────────────╮ "
" │xyz                                          2 countries│ "
" ╰────────────────────────────────────────────────────────╯ "
"                                                            "
"                                                            "
"                     No countries found                     "
"                                                            "
"                                                            "
" ↑↓/tab move · enter details · esc quit         0/2 matches "
"#);
}

#[test]
fn grid_frame() {
	let mut app = loaded_app();
	app.set_query("a");
	assert_snapshot!(render_sized(&mut app, 72, 12), @r#"
"                            Country Explorer                            "
"          Discover information about countries around the world         "
" ╭────────────────────────────────────────────────────────────────────╮ "
" │a                                                        2 countries│ "
" ╰────────────────────────────────────────────────────────────────────╯ "
" ╭ France ─────────────────────────╮╭ Germany ────────────────────────╮ "
" │Capital: France City             ││Capital: Germany City            │ "
" │Population: 67,391,582           ││Population: 83,240,525           │ "
" │Region: Europe                   ││Region: Europe                   │ "
" │Languages: French                ││Languages: German                │ "
" ╰─────────────────────────────────╯╰─────────────────────────────────╯ "
" ↑↓/tab move · enter details · esc quit                     2/2 matches "
"#);
}

#[test]
fn modal_frame() {
	let mut app = loaded_app();
	app.set_query("fra");
	app.handle_key(key(KeyCode::Enter));
	assert_snapshot!(render_sized(&mut app, 60, 16), @r#"
"╔ France ══════════════════════════════════════════════[X]═╗"
"║Official name  French Republic                            ║"
"║Capital        France City                                ║"
"║Region         Europe                                     ║"
"║Subregion      N/A                                        ║"
"║Population     67,391,582                                 ║"
"║Area           551,695 km²                                ║"
"║Languages      French                                     ║"
"║Currencies     Euro                                       ║"
"║Flag           N/A                                        ║"
"║                                                          ║"
"║                                                          ║"
"║                                                          ║"
"║                                                          ║"
"║                                                          ║"
"╚══════════════════════════════════════════════════════════╝"
"#);
}

#[test]
fn click_before_modal_is_drawn_keeps_it_open() {
	let mut app = loaded_app();
	app.set_query("fra");
	app.handle_key(key(KeyCode::Enter));

	app.handle_mouse(click(0, 0));
	assert!(app.is_modal_open());

	render(&mut app);
	app.handle_mouse(click(0, 0));
	assert!(!app.is_modal_open());
}

#[test]
fn configured_labels_replace_field_names_and_hints() {
	let mut app = loaded_app();
	app.set_labels(UiLabels {
		capital: "Hauptstadt".to_string(),
		matches: "Treffer".to_string(),
		browse_hints: "esc beenden".to_string(),
		modal_hints: "esc schließen".to_string(),
		..UiLabels::default()
	});
	app.set_query("fra");

	let view = render(&mut app);
	assert!(view.contains("Hauptstadt: France City"));
	assert!(view.contains("esc beenden"));
	assert!(view.contains("1/2 Treffer"));
	assert!(!view.contains("Capital"));

	app.handle_key(key(KeyCode::Enter));
	let view = render(&mut app);
	assert!(view.contains("Hauptstadt"));
	assert!(view.contains("esc schließen"));
}

fn press(code: KeyCode) -> Event {
	Event::Key(key(code))
}

#[test]
fn event_loop_handles_a_batch_and_returns_the_choice() {
	let mut app = loaded_app();
	app.set_query("fra");
	let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
	let (tx, rx) = mpsc::channel();
	for event in [
		press(KeyCode::Enter),
		Event::Mouse(click(0, 0)),
		press(KeyCode::Enter),
	] {
		tx.send(event).expect("send");
	}
	drop(tx);

	let outcome = app.event_loop(&mut terminal, &rx).expect("outcome");
	assert!(outcome.accepted);
	assert_eq!(
		outcome.selection.as_ref().map(Country::common_name),
		Some("France")
	);
}

#[test]
fn event_loop_stops_when_input_closes() {
	let mut app = loaded_app();
	let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
	let (tx, rx) = mpsc::channel();
	tx.send(press(KeyCode::Char('g'))).expect("send");
	drop(tx);

	let err = app.event_loop(&mut terminal, &rx).unwrap_err();
	assert!(err.to_string().contains("disconnected"));
	assert_eq!(app.query(), "g");
}
