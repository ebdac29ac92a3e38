mod button;
pub use button::*;

mod toggle;
pub use toggle::*;

mod card;
pub use card::*;

mod badge;
pub use badge::*;

mod input;
pub use input::*;

mod textarea;
pub use textarea::*;

mod speech_bubble;
pub use speech_bubble::*;

mod panel;
pub use panel::*;

mod starburst;
pub use starburst::*;

mod progress_bar;
pub use progress_bar::*;
