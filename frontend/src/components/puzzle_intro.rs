use std::rc::Rc;

use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config;
use crate::intro::IntroPhase;
use crate::puzzle::{PuzzleState, SelectOutcome};

pub enum PuzzleAction {
    Select(usize),
}

impl Reducible for PuzzleState {
    type Action = PuzzleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PuzzleAction::Select(index) => {
                let mut next = (*self).clone();
                match next.select_piece(index) {
                    SelectOutcome::Ignored => self,
                    outcome => {
                        log::debug!("Puzzle click {} -> {:?}, now {:?}", index, outcome, next.phase());
                        next.into()
                    }
                }
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PuzzleIntroProps {
    pub phase: IntroPhase,
    pub on_complete: Callback<()>,
}

#[function_component(PuzzleIntro)]
pub fn puzzle_intro(props: &PuzzleIntroProps) -> Html {
    let puzzle = use_reducer(PuzzleState::new);

    // Hand over to the page shortly after the last swap lands
    {
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |solved: &bool| {
                if *solved {
                    log::info!("Intro puzzle solved");
                    let timeout = Timeout::new(config::SOLVE_DELAY_MS, move || {
                        on_complete.emit(());
                    });
                    timeout.forget();
                }
                || ()
            },
            puzzle.is_solved(),
        );
    }

    let skip = {
        let on_complete = props.on_complete.clone();
        Callback::from(move |_: MouseEvent| on_complete.emit(()))
    };

    let pieces = puzzle.board().pieces().iter().enumerate().map(|(index, piece)| {
        let onclick = {
            let puzzle = puzzle.clone();
            Callback::from(move |_: MouseEvent| puzzle.dispatch(PuzzleAction::Select(index)))
        };
        let class = classes!(
            "puzzle-piece",
            format!("piece-{}", piece),
            (puzzle.selected() == Some(index)).then(|| "selected"),
        );
        html! { <div key={index} {class} {onclick}></div> }
    });

    html! {
        <section id="intro-game" class="intro-game" style={props.phase.overlay_style()}>
            <style>
                {r#"
                    .intro-game {
                        position: fixed;
                        inset: 0;
                        z-index: 2000;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: #fbf6f0;
                        transition: opacity 1s ease;
                    }
                    .intro-game h1 {
                        font-family: "Great Vibes", cursive;
                        font-size: 3rem;
                        color: #8a6d5a;
                        margin-bottom: 0.5rem;
                    }
                    .intro-game p {
                        color: #7a6658;
                        margin-bottom: 2rem;
                    }
                    #puzzle-board {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 4px;
                        width: min(80vw, 360px);
                        aspect-ratio: 1 / 1;
                    }
                    .puzzle-piece {
                        background-image: url("/assets/photos/puzzle.jpg");
                        background-size: 200% 200%;
                        cursor: pointer;
                        border: 3px solid transparent;
                        transition: border-color 0.2s ease, transform 0.2s ease;
                    }
                    .puzzle-piece.selected {
                        border-color: #c9a27e;
                        transform: scale(0.95);
                    }
                    .piece-0 { background-position: 0% 0%; }
                    .piece-1 { background-position: 100% 0%; }
                    .piece-2 { background-position: 0% 100%; }
                    .piece-3 { background-position: 100% 100%; }
                    .skip-intro {
                        margin-top: 2rem;
                        background: none;
                        border: none;
                        color: #a38b7a;
                        text-decoration: underline;
                        cursor: pointer;
                    }
                "#}
            </style>
            <h1>{"Piece us together"}</h1>
            <p>{"Tap two pieces to swap them and reveal our day."}</p>
            <div id="puzzle-board">
                { for pieces }
            </div>
            <button class="skip-intro" onclick={skip}>{"Skip"}</button>
        </section>
    }
}
