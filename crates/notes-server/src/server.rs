/// MCP server implementation for study-note generation.
///
/// Exposes three tools:
/// - `generate_notes`: Build a study-note document for a subject/topic/style
/// - `list_subjects`: List catalogue subjects
/// - `list_topics`: List the topics of one subject
use rmcp::{
    handler::server::router::tool::ToolRouter, handler::server::wrapper::Parameters, model::*,
    tool, tool_handler, tool_router, Json, ServerHandler,
};
use tracing::info;

use notes_engine::api::{
    GenerateNotesParams, GenerateNotesResponse, ListTopicsParams, SubjectListResponse,
    TopicListResponse,
};
use notes_engine::{NoteRequest, NoteSynthesizer};

#[derive(Clone)]
pub struct NotesServer {
    synth: NoteSynthesizer,
    tool_router: ToolRouter<NotesServer>,
}

impl NotesServer {
    pub fn new(synth: NoteSynthesizer) -> Self {
        Self {
            synth,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl NotesServer {
    #[tool(description = "Generate structured study notes for a topic. note_type is 'summary' (default), 'detailed' or 'quick'; any other value produces general study notes.")]
    async fn generate_notes(
        &self,
        Parameters(params): Parameters<GenerateNotesParams>,
    ) -> Result<Json<GenerateNotesResponse>, String> {
        let request = NoteRequest::new(params.subject(), &params.topic, params.note_type())
            .map_err(|e| e.to_string())?;
        info!(
            subject = %request.subject,
            topic = %request.topic,
            note_type = %request.style_text,
            "generate_notes tool invoked"
        );

        let notes = self.synth.synthesize(&request);
        Ok(Json(GenerateNotesResponse {
            success: true,
            notes,
            topic: request.topic,
            subject: request.subject,
            generated_at: chrono::Local::now()
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
        }))
    }

    #[tool(description = "List the subjects in the knowledge base. The last entry is always 'general' (General Studies).")]
    async fn list_subjects(&self) -> Result<Json<SubjectListResponse>, String> {
        Ok(Json(SubjectListResponse {
            subjects: self.synth.list_subjects(),
        }))
    }

    #[tool(description = "List the topic keys of a subject (e.g. 'mathematics'). Unknown subjects return ['general'].")]
    async fn list_topics(
        &self,
        Parameters(params): Parameters<ListTopicsParams>,
    ) -> Result<Json<TopicListResponse>, String> {
        let subject = params.subject.trim().to_lowercase();
        let topics = self.synth.list_topics(&subject);
        Ok(Json(TopicListResponse { subject, topics }))
    }
}

#[tool_handler]
impl ServerHandler for NotesServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "notes-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Study-note generator. Use list_subjects and list_topics to browse the \
                 curated knowledge base, then generate_notes with a topic, an optional \
                 subject and an optional note_type (summary, detailed, quick)."
                    .to_string(),
            ),
        }
    }
}
