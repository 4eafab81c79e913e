//! Presenter: owns one `CompositeDisposable` for the attached view.

use crate::domain::entities::{names::ComponentNameSet, render_context::RenderContext};

const SOURCE: &str = r#"import javax.inject.Inject;

import io.reactivex.Observable;
import io.reactivex.disposables.CompositeDisposable;

public class {{PRESENTER}} {

    private final CompositeDisposable disposable = new CompositeDisposable();

    @Inject
    public {{PRESENTER}}() {
    }

    public void attach({{VIEW_CONTRACT}} view) {
        // TODO: register to view events
        disposable.add(view.intent().flatMap(ignored -> doIntent()).subscribe(view::render));
    }

    private Observable<{{VIEW_MODEL}}> doIntent() {
        return Observable.just({{VIEW_MODEL}}.error("Not implemented"));
    }

    public void detach() {
        disposable.dispose();
    }
}
"#;

pub fn render(names: &ComponentNameSet) -> String {
    RenderContext::new(names).render(SOURCE)
}
