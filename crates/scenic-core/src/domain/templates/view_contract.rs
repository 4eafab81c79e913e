//! View contract: the render + intent surface a Fragment implements.

use crate::domain::entities::{names::ComponentNameSet, render_context::RenderContext};

const SOURCE: &str = r#"import io.reactivex.Observable;

public interface {{VIEW_CONTRACT}} {
    void render({{VIEW_MODEL}} model);

    Observable<Object> intent();
}
"#;

pub fn render(names: &ComponentNameSet) -> String {
    RenderContext::new(names).render(SOURCE)
}
