use tera::{Context, Tera};

const HOME_TEMPLATE: &str = "home.html";

/// Renders the static pages served outside the JSON api.
pub struct Pages {
    tera: Tera,
    app_name: String,
}

impl Pages {
    pub fn new(app_name: &str) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(HOME_TEMPLATE, include_str!("../static/home.html"))?;
        Ok(Self {
            tera,
            app_name: app_name.to_string(),
        })
    }

    pub fn home(&self) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("app_name", &self.app_name);
        context.insert("todo_endpoint", "/todo/");
        self.tera.render(HOME_TEMPLATE, &context)
    }
}
