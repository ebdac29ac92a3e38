use std::path::PathBuf;

use anyhow::Context as _;
use gpui::{
    App, AppContext, Application, Bounds, Context, Entity, FocusHandle, FontWeight, KeyBinding,
    Rgba, SharedString, Window, WindowBounds, WindowOptions, actions, div, prelude::*, px, rems,
    size,
};
use gpui_primitives::input::InputState;
use tracing_subscriber::EnvFilter;

use gpui_retro::{
    components::{
        BadgeSize, BadgeVariant, BubbleDirection, BubbleVariant, ButtonSize, ButtonVariant,
        CardVariant, InputKind, ProgressVariant, RetroBadge, RetroButton, RetroCard, RetroInput,
        RetroPanel, RetroProgressBar, RetroSpeechBubble, RetroStarburst, RetroTextarea,
        RetroToggle, StarburstSize,
    },
    theme::{ThemeColorsRefinement, ThemeProvider, ThemeRefinement, parse_color},
};

actions!(gallery, [TabNext, TabPrev]);

struct Gallery {
    focus_handle: FocusHandle,
    refinement: ThemeRefinement,
    name: Entity<InputState>,
    password: Entity<InputState>,
    message: Entity<InputState>,
    turbo: bool,
    progress: f32,
    clicks: usize,
}

fn color_or(value: &str, fallback: Rgba) -> Rgba {
    parse_color(value).unwrap_or_else(|error| {
        tracing::warn!(%error, "falling back to default color");
        fallback
    })
}

fn section(title: impl Into<SharedString>) -> gpui::Div {
    div()
        .flex()
        .flex_col()
        .gap(rems(1.5))
        .child(
            div()
                .text_size(rems(2.))
                .font_weight(FontWeight::BLACK)
                .child(title.into()),
        )
}

impl Render for Gallery {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let on_launch = cx.listener(|view, _: &(), _window, cx| {
            view.clicks += 1;
            view.progress = (view.progress + 10.).min(100.);
            cx.notify();
        });
        let on_reset = cx.listener(|view, _: &(), _window, cx| {
            view.progress = 0.;
            cx.notify();
        });
        let on_turbo = cx.listener(|view, checked: &bool, _window, cx| {
            view.turbo = *checked;
            cx.notify();
        });

        let turbo = self.turbo;
        let progress = self.progress;
        let clicks = self.clicks;
        let name = self.name.clone();
        let password = self.password.clone();
        let message = self.message.clone();

        div()
            .tab_group()
            .track_focus(&self.focus_handle)
            .id("gallery")
            .size_full()
            .overflow_y_scroll()
            .child(
                ThemeProvider::new(self.refinement.clone()).child_with(move |scope| {
                    let theme = scope.theme();
                    let text = color_or(&theme.colors.text, gpui::rgb(0x000000));
                    let heading = theme.fonts.heading_family();

                    div()
                        .flex()
                        .flex_col()
                        .gap(rems(3.))
                        .p(rems(3.))
                        .bg(gpui::rgb(0x7DD3FC))
                        .text_color(text)
                        .font_family(heading)
                        .child(
                            section("Buttons")
                                .child(
                                    div()
                                        .flex()
                                        .flex_wrap()
                                        .gap(rems(1.5))
                                        .child(
                                            RetroButton::new("launch")
                                                .text(format!("Launch ({clicks})"))
                                                .on_click(move |window, cx| {
                                                    on_launch(&(), window, cx)
                                                }),
                                        )
                                        .child(
                                            RetroButton::new("reset")
                                                .text("Reset")
                                                .variant(ButtonVariant::Secondary)
                                                .size(ButtonSize::Sm)
                                                .on_click(move |window, cx| {
                                                    on_reset(&(), window, cx)
                                                }),
                                        )
                                        .child(
                                            RetroButton::new("go")
                                                .text("Go")
                                                .variant(ButtonVariant::Success)
                                                .size(ButtonSize::Lg),
                                        )
                                        .child(
                                            RetroButton::new("abort")
                                                .text("Abort")
                                                .variant(ButtonVariant::Danger)
                                                .disabled(!turbo),
                                        ),
                                ),
                        )
                        .child(
                            section("Cards").child(
                                div()
                                    .flex()
                                    .gap(rems(1.5))
                                    .child(
                                        RetroCard::new()
                                            .title("Default")
                                            .child("Glass and ink."),
                                    )
                                    .child(
                                        RetroCard::new()
                                            .title("Blue")
                                            .variant(CardVariant::Blue)
                                            .child("Cool as the atom age."),
                                    )
                                    .child(RetroCard::new().variant(CardVariant::Yellow).child(
                                        RetroBadge::new("NEW!")
                                            .variant(BadgeVariant::Danger)
                                            .size(BadgeSize::Lg),
                                    )),
                            ),
                        )
                        .child(
                            section("Badges").child(
                                div()
                                    .flex()
                                    .gap(rems(1.))
                                    .child(RetroBadge::new("Primary").size(BadgeSize::Sm))
                                    .child(
                                        RetroBadge::new("Secondary")
                                            .variant(BadgeVariant::Secondary),
                                    )
                                    .child(
                                        RetroBadge::new("Success").variant(BadgeVariant::Success),
                                    ),
                            ),
                        )
                        .child(
                            section("Inputs")
                                .child(RetroInput::new("name", name).placeholder("Your name"))
                                .child(
                                    RetroInput::new("password", password)
                                        .kind(InputKind::Password)
                                        .placeholder("Secret code"),
                                )
                                .child(
                                    RetroTextarea::new("message", message)
                                        .rows(3)
                                        .disabled(turbo)
                                        .on_change(|text| {
                                            tracing::info!(len = text.len(), "message edited")
                                        }),
                                ),
                        )
                        .child(
                            section("Speech").child(
                                div()
                                    .flex()
                                    .gap(rems(3.))
                                    .pb(rems(2.5))
                                    .child(RetroSpeechBubble::new().child("Hello there!"))
                                    .child(
                                        RetroSpeechBubble::new()
                                            .variant(BubbleVariant::Thought)
                                            .direction(BubbleDirection::Right)
                                            .child("Hmm..."),
                                    )
                                    .child(
                                        RetroSpeechBubble::new()
                                            .variant(BubbleVariant::Shout)
                                            .child("LOOK OUT!"),
                                    ),
                            ),
                        )
                        .child(
                            section("Panels").child(
                                div()
                                    .flex()
                                    .gap(rems(1.5))
                                    .child(RetroPanel::new().sound("POW!").child("The hero strikes."))
                                    .child(
                                        RetroPanel::new()
                                            .sound("ZAP!")
                                            .color(gpui::rgb(0x3B82F6))
                                            .child("Ray gun fired."),
                                    )
                                    .child(
                                        div()
                                            .flex()
                                            .items_center()
                                            .gap(rems(1.))
                                            .child(RetroStarburst::new("!").size(StarburstSize::Sm))
                                            .child(RetroStarburst::new("SALE"))
                                            .child(
                                                RetroStarburst::new("WOW")
                                                    .size(StarburstSize::Lg)
                                                    .color(gpui::rgb(0xEF4444)),
                                            ),
                                    ),
                            ),
                        )
                        .child(
                            section("Progress")
                                .child(RetroProgressBar::new(progress))
                                .child(
                                    RetroProgressBar::new(progress / 2.)
                                        .variant(ProgressVariant::Success),
                                )
                                .child(
                                    RetroProgressBar::new(120.)
                                        .variant(ProgressVariant::Danger)
                                        .show_label(turbo),
                                ),
                        )
                        .child(
                            section("Toggles").child(
                                RetroToggle::new("turbo")
                                    .label("Turbo mode")
                                    .checked(turbo)
                                    .on_change(move |checked, window, cx| {
                                        on_turbo(checked, window, cx)
                                    }),
                            ),
                        )
                }),
            )
    }
}

fn load_refinement() -> anyhow::Result<ThemeRefinement> {
    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        return Ok(ThemeRefinement::default().colors(ThemeColorsRefinement {
            primary: Some("#FFDC00".into()),
            ..Default::default()
        }));
    };

    ThemeRefinement::from_path(&path)
        .with_context(|| format!("loading theme overrides from {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let refinement = load_refinement()?;

    Application::new().run(move |cx: &mut App| {
        gpui_retro::init(cx);
        init_tab_indexing_actions(cx);

        let bounds = Bounds::centered(None, size(px(1100.), px(900.)), cx);

        let opened = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            |_window, cx| {
                cx.new(|cx| Gallery {
                    focus_handle: cx.focus_handle(),
                    refinement,
                    name: cx.new(|cx| InputState::new(cx)),
                    password: cx.new(|cx| InputState::new(cx)),
                    message: cx.new(|cx| {
                        InputState::new(cx).initial_value("Dear diary, the robots are friendly.")
                    }),
                    turbo: false,
                    progress: 30.,
                    clicks: 0,
                })
            },
        );

        if let Err(error) = opened {
            tracing::error!(%error, "failed to open gallery window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });

    Ok(())
}

fn init_tab_indexing_actions(cx: &mut App) {
    cx.on_action(move |_: &TabNext, cx| {
        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, cx| {
                window.focus_next(cx);
            });
        })
    });

    cx.on_action(move |_: &TabPrev, cx| {
        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, cx| {
                window.focus_prev(cx);
            });
        })
    });

    cx.bind_keys([KeyBinding::new("tab", TabNext, None)]);
    cx.bind_keys([KeyBinding::new("shift-tab", TabPrev, None)]);
}
