// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(title = "Agenda de Contatos", version = "v1"),
    paths(
        // --- Contato ---
        handlers::contato::listar_contatos,
        handlers::contato::listar_contato_por_telefone,
        handlers::contato::listar_contatos_por_ddd,
        handlers::contato::cadastrar_contato,
        handlers::contato::alterar_contato,
        handlers::contato::deletar_contato,

        // --- Regiao ---
        handlers::regiao::listar_ddd,
        handlers::regiao::cadastrar_ddd,
    ),
    components(
        schemas(
            // --- Contato ---
            models::contato::Contato,
            models::contato::ContatoDto,
            models::contato::ContatoInput,
            models::contato::ContatoUpdateInput,

            // --- Regiao ---
            models::regiao::Regiao,
            models::regiao::RegiaoDto,
            models::regiao::RegiaoInput,
        )
    ),
    tags(
        (name = "Contato", description = "Cadastro, consulta, alteração e exclusão de contatos"),
        (name = "Regiao", description = "DDDs e suas cidades")
    )
)]
pub struct ApiDoc;
