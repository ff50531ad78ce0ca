use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file name under /icons without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon names used outside the menu definition
pub mod icons {
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const PLUS: &str = "plus";
    pub const MINUS: &str = "minus";
    pub const LOG_OUT: &str = "log-out";
    pub const EYE: &str = "eye";
    pub const EYE_OFF: &str = "eye-off";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const CAMERA: &str = "camera";
    pub const LOGO: &str = "logo";
    pub const LOADER: &str = "loader";
    pub const X: &str = "x";
}
