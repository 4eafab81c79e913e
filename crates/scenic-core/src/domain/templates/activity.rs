//! Entry-point Activity: hosts the scene's Fragment.

use crate::domain::entities::{names::ComponentNameSet, render_context::RenderContext};

const SOURCE: &str = r#"import android.app.Activity;
import android.os.Bundle;

public class {{ACTIVITY}} extends Activity {
    @Override
    protected void onCreate(Bundle savedInstanceState) {
        super.onCreate(savedInstanceState);
        setContentView(R.layout.{{DIRECTORY}}_activity);
        getFragmentManager().beginTransaction().replace(R.id.fragment_container, new {{FRAGMENT}}()).commit();
    }
}
"#;

pub fn render(names: &ComponentNameSet) -> String {
    RenderContext::new(names).render(SOURCE)
}
