//! Account deletion notice sent once a retirement has been recorded.

use crate::{NotificationMessage, TemplateContext, resolve_language};

const KIND: &str = "deletion";

struct Template {
    language: &'static str,
    subject: &'static str,
    body: &'static str,
}

const TEMPLATES: [Template; 5] = [
    Template {
        language: "en",
        subject: "Your {platform_name} account has been deleted",
        body: "Hi {full_name},\n\n\
               We're writing to notify you that you have been unenrolled from all courses \
               and your {platform_name} account has been deleted. If you did not request \
               this, please contact {contact_email}.\n\n\
               Thank you,\nThe {platform_name} team\n{lms_root_url}",
    },
    Template {
        language: "es",
        subject: "Tu cuenta de {platform_name} ha sido eliminada",
        body: "Hola {full_name},\n\n\
               Te escribimos para informarte que se ha cancelado tu inscripción en todos \
               los cursos y que tu cuenta de {platform_name} ha sido eliminada. Si no lo \
               solicitaste, escribe a {contact_email}.\n\n\
               Gracias,\nEl equipo de {platform_name}\n{lms_root_url}",
    },
    Template {
        language: "fr",
        subject: "Votre compte {platform_name} a été supprimé",
        body: "Bonjour {full_name},\n\n\
               Nous vous informons que vous avez été désinscrit de tous les cours et que \
               votre compte {platform_name} a été supprimé. Si vous n'êtes pas à l'origine \
               de cette demande, contactez {contact_email}.\n\n\
               Merci,\nL'équipe {platform_name}\n{lms_root_url}",
    },
    Template {
        language: "de",
        subject: "Ihr {platform_name}-Konto wurde gelöscht",
        body: "Hallo {full_name},\n\n\
               wir möchten Sie darüber informieren, dass Sie von allen Kursen abgemeldet \
               wurden und Ihr {platform_name}-Konto gelöscht wurde. Falls Sie dies nicht \
               veranlasst haben, wenden Sie sich an {contact_email}.\n\n\
               Vielen Dank,\nIhr {platform_name}-Team\n{lms_root_url}",
    },
    Template {
        language: "pt",
        subject: "A sua conta {platform_name} foi excluída",
        body: "Olá {full_name},\n\n\
               Informamos que a sua inscrição em todos os cursos foi cancelada e que a sua \
               conta {platform_name} foi excluída. Se você não fez esta solicitação, entre \
               em contato com {contact_email}.\n\n\
               Obrigado,\nEquipe {platform_name}\n{lms_root_url}",
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct DeletionNotification;

impl DeletionNotification {
    /// Render the notice for one recipient.
    ///
    /// `language` is the recipient's preference when present, otherwise
    /// `platform_default` decides.
    pub fn personalize(
        &self,
        recipient_email: &str,
        language: Option<&str>,
        platform_default: &str,
        context: TemplateContext,
    ) -> NotificationMessage {
        let language = resolve_language(language, platform_default);
        let template = TEMPLATES
            .iter()
            .find(|t| t.language == language)
            .unwrap_or(&TEMPLATES[0]);

        NotificationMessage {
            kind: KIND,
            recipient_email: recipient_email.to_string(),
            language: template.language,
            subject: context.render(template.subject),
            body: context.render(template.body),
            context,
        }
    }
}
