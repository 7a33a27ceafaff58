use crate::utils::*;
use clap::Args;
use game::LightGenerator;
use lightsout_core as game;
use yew::prelude::*;

/// One game in progress, plus what is needed to start over.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GameSession {
    pub config: game::GameConfig,
    pub seed: u64,
    pub engine: game::PlayEngine,
}

impl GameSession {
    fn new(config: game::GameConfig, seed: u64) -> Self {
        let grid = game::RandomLightGenerator::new(seed).generate(config);
        Self {
            config,
            seed,
            engine: game::PlayEngine::new(grid),
        }
    }

    fn restart(&mut self, seed: u64) {
        *self = Self::new(self.config, seed);
    }

    fn flip(&mut self, coords: game::Coords) -> bool {
        match self.engine.flip(coords) {
            Ok(game::FlipOutcome::Won) => {
                log::info!("won after {} flips", self.engine.flip_count());
                true
            }
            Ok(outcome) => outcome.has_update(),
            Err(err) => {
                log::debug!("flip at {} rejected: {}", coords, err);
                false
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Msg {
    Flip(game::Coords),
    NewGame,
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct CellProps {
    pub lit: bool,
    pub onflip: Callback<()>,
}

/// Turns any event into a single argument-free notification.
fn forward_click<E: 'static>(onflip: Callback<()>) -> Callback<E> {
    Callback::from(move |_: E| onflip.emit(()))
}

/// Draws one light; knows nothing about where it sits on the board.
#[function_component(CellView)]
pub(crate) fn cell_component(props: &CellProps) -> Html {
    let CellProps { lit, onflip } = props.clone();

    let class = classes!("cell", lit.then_some("lit"));
    let onclick = forward_click::<MouseEvent>(onflip);

    html! {
        <td {class} {onclick}/>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Number of rows on the board
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_ROWS)]
    pub rows: game::Coord,

    /// Number of columns on the board
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_COLS)]
    pub cols: game::Coord,

    /// Chance any cell is lit at the start of a game
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_CHANCE_LIGHT_STARTS_ON)]
    pub chance: f64,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Set when the hash fragment could not be parsed
    #[arg(skip)]
    pub settings_error: Option<String>,
}

impl GameProps {
    pub(crate) fn from_settings_error(err: impl ToString) -> Self {
        Self {
            settings_error: Some(err.to_string()),
            ..Self::default()
        }
    }

    fn game_config(&self) -> game::Result<game::GameConfig> {
        game::GameConfig::new(game::BoardSize::new(self.rows, self.cols), self.chance)
    }

    fn start_session(&self, seed: u64) -> Result<GameSession, String> {
        if let Some(err) = &self.settings_error {
            return Err(err.trim().to_string());
        }
        self.game_config()
            .map(|config| GameSession::new(config, seed))
            .map_err(|err| err.to_string())
    }
}

impl Default for GameProps {
    fn default() -> Self {
        let config = game::GameConfig::default();
        Self {
            rows: config.size.rows,
            cols: config.size.cols,
            chance: config.chance_light_starts_on,
            seed: None,
            settings_error: None,
        }
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: Result<GameSession, String>,
}

impl GameView {
    fn view_board(session: &GameSession, ctx: &Context<Self>) -> Html {
        let game::BoardSize { rows, cols } = session.engine.size();

        html! {
            <table class="board">
                {
                    for (0..rows).map(|row| html! {
                        <tr>
                            {
                                for (0..cols).map(|col| {
                                    let coords = game::Coords::new(row, col);
                                    let lit = session.engine.is_lit(coords);
                                    let onflip = ctx.link().callback(move |()| Msg::Flip(coords));
                                    html! {
                                        <CellView {lit} {onflip}/>
                                    }
                                })
                            }
                        </tr>
                    })
                }
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let session = props.start_session(seed);
        if let Err(err) = &session {
            log::error!("Invalid board settings {:?}: {}", props, err);
        }

        Self { session }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let Ok(session) = &mut self.session else {
            log::warn!("no board to apply {:?} to", msg);
            return false;
        };

        match msg {
            Flip(coords) => {
                log::debug!("flip around: {}", coords);
                session.flip(coords)
            }
            NewGame => {
                session.restart(js_random_seed());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let session = match &self.session {
            Ok(session) => session,
            Err(err) => {
                return html! {
                    <div class="lightsout">
                        <p class="error">{format!("Invalid board settings: {err}")}</p>
                    </div>
                };
            }
        };

        let lights_on = format_for_counter(session.engine.lights_on().into());
        let flips = format_for_counter(session.engine.flip_count());
        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });

        let content = if session.engine.is_finished() {
            html! { <div class="win">{"You win!"}</div> }
        } else {
            Self::view_board(session, ctx)
        };

        html! {
            <div class="lightsout">
                <nav>
                    <aside>{lights_on}</aside>
                    <span><button onclick={cb_new_game}>{"New game"}</button></span>
                    <aside>{flips}</aside>
                </nav>
                {content}
            </div>
        }
    }
}
