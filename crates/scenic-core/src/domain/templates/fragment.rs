//! Fragment: the concrete view. Implements the view contract and forwards
//! lifecycle to the injected presenter.

use crate::domain::entities::{names::ComponentNameSet, render_context::RenderContext};

const SOURCE: &str = r#"import android.app.Fragment;
import android.os.Bundle;
import android.support.annotation.Nullable;
import android.view.LayoutInflater;
import android.view.View;
import android.view.ViewGroup;

import javax.inject.Inject;

import butterknife.ButterKnife;
import io.reactivex.Observable;

public class {{FRAGMENT}} extends Fragment implements {{VIEW_CONTRACT}} {

    @Inject
    {{PRESENTER}} presenter;

    @Override
    public View onCreateView(LayoutInflater inflater, @Nullable ViewGroup container, @Nullable Bundle savedInstanceState) {
        return inflater.inflate(R.layout.{{DIRECTORY}}_fragment, container, false);
    }

    @Override
    public void onViewCreated(View view, @Nullable Bundle savedInstanceState) {
        super.onViewCreated(view, savedInstanceState);
        ButterKnife.bind(this, view);
    }

    @Override
    public void onStart() {
        super.onStart();
        presenter.attach(this);
    }

    @Override
    public void onStop() {
        super.onStop();
        presenter.detach();
    }

    @Override
    public Observable<Object> intent() {
        // TODO: bind intent
        return Observable.empty();
    }

    @Override
    public void render({{VIEW_MODEL}} model) {
        // TODO: render view with model
    }
}
"#;

pub fn render(names: &ComponentNameSet) -> String {
    RenderContext::new(names).render(SOURCE)
}
