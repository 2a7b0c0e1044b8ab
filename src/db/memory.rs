// src/db/memory.rs
//
// Repositórios em memória usados pelos testes no lugar do Postgres.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    common::error::AppError,
    db::repository::{ContatoRepository, RegiaoRepository, Repository},
    models::{
        contato::{Contato, NovoContato},
        regiao::{NovaRegiao, Regiao},
    },
};

#[derive(Default)]
pub struct MemoryRegiaoRepository {
    linhas: Mutex<Vec<Regiao>>,
}

#[async_trait]
impl Repository<Regiao, NovaRegiao> for MemoryRegiaoRepository {
    async fn obter_todos(&self) -> Result<Vec<Regiao>, AppError> {
        Ok(self.linhas.lock().unwrap().clone())
    }

    async fn cadastrar(&self, nova: NovaRegiao) -> Result<Regiao, AppError> {
        let mut linhas = self.linhas.lock().unwrap();
        let regiao = Regiao {
            id_regiao: linhas.len() as i32 + 1,
            ddd: nova.ddd,
            cidade: nova.cidade,
            data_cadastro: nova.data_cadastro,
        };
        linhas.push(regiao.clone());
        Ok(regiao)
    }
}

#[async_trait]
impl RegiaoRepository for MemoryRegiaoRepository {
    async fn obter_por_ddd(&self, ddd: i32) -> Result<Option<Regiao>, AppError> {
        Ok(self.linhas.lock().unwrap().iter().find(|r| r.ddd == ddd).cloned())
    }
}

#[derive(Default)]
pub struct MemoryContatoRepository {
    linhas: Mutex<Vec<Contato>>,
    proximo_id: Mutex<i32>,
}

#[async_trait]
impl Repository<Contato, NovoContato> for MemoryContatoRepository {
    async fn obter_todos(&self) -> Result<Vec<Contato>, AppError> {
        Ok(self.linhas.lock().unwrap().clone())
    }

    async fn cadastrar(&self, novo: NovoContato) -> Result<Contato, AppError> {
        let mut proximo_id = self.proximo_id.lock().unwrap();
        *proximo_id += 1;

        let contato = Contato {
            id: *proximo_id,
            data_cadastro: novo.data_cadastro,
            nome_contato: novo.nome_contato,
            telefone: novo.telefone,
            email: novo.email,
            ddd: novo.ddd,
            id_regiao: novo.id_regiao,
        };
        self.linhas.lock().unwrap().push(contato.clone());
        Ok(contato)
    }
}

#[async_trait]
impl ContatoRepository for MemoryContatoRepository {
    async fn obter_por_telefone(&self, telefone: &str) -> Result<Option<Contato>, AppError> {
        Ok(self.linhas.lock().unwrap().iter().find(|c| c.telefone == telefone).cloned())
    }

    async fn obter_por_ddd(&self, ddd: i32) -> Result<Vec<Contato>, AppError> {
        Ok(self.linhas.lock().unwrap().iter().filter(|c| c.ddd == ddd).cloned().collect())
    }

    async fn obter_por_nome(&self, nome: &str) -> Result<Option<Contato>, AppError> {
        Ok(self.linhas.lock().unwrap().iter().find(|c| c.nome_contato == nome).cloned())
    }

    async fn alterar(&self, contato: &Contato) -> Result<(), AppError> {
        let mut linhas = self.linhas.lock().unwrap();
        if let Some(linha) = linhas.iter_mut().find(|c| c.id == contato.id) {
            linha.nome_contato = contato.nome_contato.clone();
            linha.ddd = contato.ddd;
            linha.telefone = contato.telefone.clone();
            linha.email = contato.email.clone();
        }
        Ok(())
    }

    async fn deletar_por_nome(&self, nome: &str) -> Result<(), AppError> {
        let mut linhas = self.linhas.lock().unwrap();
        if let Some(posicao) = linhas.iter().position(|c| c.nome_contato == nome) {
            linhas.remove(posicao);
        }
        Ok(())
    }
}
