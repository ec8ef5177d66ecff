use crate::canvas::SvgCanvas;
use bitflags::bitflags;
use clap::Args;
use gemfall_core as game;
use gloo::timers::callback::Interval;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

/// Milliseconds between engine ticks, roughly one frame at 60 Hz.
const TICK_INTERVAL_MS: u32 = 16;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct MouseButtons: u16 {
        const LEFT    = 1;
        const RIGHT   = 1 << 1;
        const MIDDLE  = 1 << 2;
        const BACK    = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Tick,
    Press(game::Coord2),
    NewGame,
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct BoardProps {
    /// Board width in cells
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(1..))]
    pub width: game::Coord,

    /// Board height in cells
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(1..))]
    pub height: game::Coord,

    /// Cell edge length in pixels
    #[arg(long, default_value_t = game::CELL_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    pub cell_size: u32,
}

impl BoardProps {
    fn config(&self) -> game::GameConfig {
        game::GameConfig::new((self.width, self.height)).unwrap_or_else(|err| {
            log::warn!("{err}, falling back to the default board");
            game::GameConfig::default()
        })
    }
}

/// Maps a mouse press on the board to a cell, ignoring everything but a plain left press.
fn press_target(buttons: u16, offset: (i32, i32), cell_size: u32) -> Option<game::Coord2> {
    if MouseButtons::from_bits_truncate(buttons) != MouseButtons::LEFT {
        return None;
    }
    game::pixel_to_cell(offset.0, offset.1, cell_size)
}

pub(crate) struct GameView {
    game: game::GameState,
    _timer_interval: Interval,
}

impl GameView {
    fn create_timer(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(TICK_INTERVAL_MS, move || link.send_message(Msg::Tick))
    }

    fn trace_snapshot(&self) {
        if log::log_enabled!(log::Level::Trace) {
            match serde_json::to_string(&game::Snapshot::of(&self.game)) {
                Ok(json) => log::trace!("{json}"),
                Err(err) => log::warn!("could not serialize snapshot: {err}"),
            }
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            game: game::GameState::new(ctx.props().config()),
            _timer_interval: GameView::create_timer(ctx),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Tick => {
                let outcome = self.game.tick();
                if outcome.has_update() {
                    log::debug!("{:?}", outcome);
                    self.trace_snapshot();
                }
                outcome.has_update()
            }
            Press(coords) => {
                let outcome = self.game.pointer_down(coords);
                log::trace!("press at {:?}: {:?}", coords, outcome);
                outcome.has_update()
            }
            NewGame => {
                log::info!("new game");
                self.game = game::GameState::new(ctx.props().config());
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.game = game::GameState::new(ctx.props().config());
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let cell_size = ctx.props().cell_size;
        let scene = game::Scene::from_grid(self.game.grid(), cell_size);
        let mut canvas = SvgCanvas::default();
        scene.draw(&mut canvas);

        let onmousedown = ctx.link().batch_callback(move |e: MouseEvent| {
            press_target(e.buttons(), (e.offset_x(), e.offset_y()), cell_size).map(Msg::Press)
        });
        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });
        let resolving = self.game.phase().is_resolving().then_some("resolving");

        html! {
            <div class="gemfall" oncontextmenu={Callback::from(move |e: MouseEvent| e.prevent_default())}>
                <nav>
                    <aside>{format!("Score: {}", self.game.score())}</aside>
                    <span><button onclick={cb_new_game}>{"New game"}</button></span>
                    <aside>{format!("Combo: {}", self.game.combo())}</aside>
                </nav>
                <svg
                    class={classes!(resolving)}
                    width={scene.width.to_string()}
                    height={scene.height.to_string()}
                    viewBox={format!("0 0 {} {}", scene.width, scene.height)}
                    {onmousedown}
                >
                    <rect width="100%" height="100%" fill="white" pointer-events="none"/>
                    {canvas.into_html()}
                </svg>
            </div>
        }
    }
}
