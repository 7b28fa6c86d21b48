use askama::Template;
use fiverings_contact::TemplateParams;
use fiverings_shared::site::COMPANY;

#[derive(Template)]
#[template(path = "contact.html")]
pub(crate) struct ContactHtml<'a> {
    pub params: &'a TemplateParams,
}

#[derive(Template)]
#[template(path = "contact.txt")]
pub(crate) struct ContactPlain<'a> {
    pub params: &'a TemplateParams,
}

impl ContactHtml<'_> {
    fn company(&self) -> &'static str {
        COMPANY.name
    }
}

impl ContactPlain<'_> {
    fn company(&self) -> &'static str {
        COMPANY.name
    }
}
