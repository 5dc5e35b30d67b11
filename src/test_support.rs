use yew::html::BaseComponent;
use yew::ServerRenderer;

/// Renders a component to plain HTML (no hydration markers).
pub async fn render<C, F>(props: F) -> String
where
    C: BaseComponent,
    F: FnOnce() -> C::Properties + Send + 'static,
{
    ServerRenderer::<C>::with_props(props)
        .hydratable(false)
        .render()
        .await
}
