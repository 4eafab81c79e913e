//! ViewModel: immutable AutoValue state snapshot.
//!
//! `loading()` always carries an empty list and no error. Both `error`
//! overloads take a non-null message; the single-argument form delegates to
//! the two-argument one.

use crate::domain::entities::{names::ComponentNameSet, render_context::RenderContext};

const SOURCE: &str = r#"import android.support.annotation.NonNull;
import android.support.annotation.Nullable;

import com.google.auto.value.AutoValue;

import java.util.Collections;
import java.util.List;

@AutoValue
public abstract class {{VIEW_MODEL}} {

    enum LoadingState { NONE, LOADING, REFRESHING }

    @NonNull
    abstract List<String> value();

    @Nullable
    abstract String error();

    abstract LoadingState loadingState();

    public static {{VIEW_MODEL}} data(@NonNull List<String> value) {
        return new AutoValue_{{VIEW_MODEL}}(value, null, LoadingState.NONE);
    }

    public static {{VIEW_MODEL}} refreshing(@NonNull List<String> value) {
        return new AutoValue_{{VIEW_MODEL}}(value, null, LoadingState.REFRESHING);
    }

    public static {{VIEW_MODEL}} loading() {
        return new AutoValue_{{VIEW_MODEL}}(Collections.<String>emptyList(), null, LoadingState.LOADING);
    }

    public static {{VIEW_MODEL}} error(@NonNull List<String> value, @NonNull String error) {
        return new AutoValue_{{VIEW_MODEL}}(value, error, LoadingState.NONE);
    }

    public static {{VIEW_MODEL}} error(@NonNull String error) {
        return error(Collections.<String>emptyList(), error);
    }
}
"#;

pub fn render(names: &ComponentNameSet) -> String {
    RenderContext::new(names).render(SOURCE)
}
