use leptos::prelude::*;

/// Badge variant styles
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Warning,
    Danger,
    Info,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "bg-gray-100 text-gray-700 border-gray-200",
            BadgeVariant::Success => "bg-green-100 text-green-700 border-green-200",
            BadgeVariant::Warning => "bg-yellow-100 text-yellow-700 border-yellow-200",
            BadgeVariant::Danger => "bg-red-100 text-red-700 border-red-200",
            BadgeVariant::Info => "bg-blue-100 text-blue-700 border-blue-200",
        }
    }
}

/// A styled badge/tag component
#[component]
pub fn Badge(
    /// The visual variant of the badge
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let base_class = "px-2 py-0.5 text-xs font-medium rounded-full border";
    let variant_class = variant.class();
    let full_class = format!("{base_class} {variant_class} {class}");

    view! {
        <span class=full_class>
            {children()}
        </span>
    }
}
