use gloo_timers::callback::Interval;
use yew::prelude::*;

const TYPE_SPEED_MS: u32 = 45;
const HOLD_TICKS: u32 = 30; // ~1.3s with the full phrase on screen

/// Cursor over a list of phrases: types one out, holds it, erases it, moves on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypewriterState {
    phrase: usize,
    shown: usize,
    deleting: bool,
    held: u32,
}

impl TypewriterState {
    pub fn tick(&mut self, phrases: &[&str]) {
        if phrases.is_empty() {
            return;
        }
        let len = phrases[self.phrase % phrases.len()].chars().count();

        if self.deleting {
            if self.shown > 0 {
                self.shown -= 1;
            } else {
                self.deleting = false;
                self.phrase = (self.phrase + 1) % phrases.len();
            }
        } else if self.shown < len {
            self.shown += 1;
        } else if self.held < HOLD_TICKS {
            self.held += 1;
        } else {
            self.held = 0;
            self.deleting = true;
        }
    }

    pub fn text(&self, phrases: &[&str]) -> String {
        if phrases.is_empty() {
            return String::new();
        }
        phrases[self.phrase % phrases.len()].chars().take(self.shown).collect()
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub phrases: Vec<&'static str>,
    #[prop_or_default]
    pub class: Classes,
}

pub enum TypewriterMsg {
    Tick,
}

pub struct Typewriter {
    state: TypewriterState,
    _interval: Interval,
}

impl Component for Typewriter {
    type Message = TypewriterMsg;
    type Properties = TypewriterProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let interval = Interval::new(TYPE_SPEED_MS, move || link.send_message(TypewriterMsg::Tick));

        Self {
            state: TypewriterState::default(),
            _interval: interval,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            TypewriterMsg::Tick => {
                let before = self.state.clone();
                self.state.tick(&ctx.props().phrases);
                before != self.state
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <span class={classes!("typewriter", props.class.clone())}>
                { self.state.text(&props.phrases) }
                <span class="typewriter-cursor">{"|"}</span>
            </span>
        }
    }
}
