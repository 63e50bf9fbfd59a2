// ==================== BOOKMARKS ====================
// Favoritos de receitas: valida o request, resolve o usuário pelo token
// e só então toca a coleção de bookmarks

use std::collections::{HashMap, HashSet};

use mongodb::bson::oid::ObjectId;

use crate::{
    database::BookmarkStore,
    models::{Bookmark, BookmarkDetails, BookmarkRequest, BookmarkResponse, Recipe, TokenPath, User},
    utils::{parse_object_id, validate_in_order, AppError},
};

/// Token -> usuário. Sem usuário, nenhuma outra operação é feita.
pub async fn resolve_user(store: &dyn BookmarkStore, token: &str) -> Result<User, AppError> {
    store
        .find_user_by_token(token)
        .await?
        .ok_or(AppError::UserNotFound)
}

/// POST / - Salva a receita nos favoritos do usuário (duplicatas permitidas)
pub async fn add_bookmark(
    store: &dyn BookmarkStore,
    request: &BookmarkRequest,
) -> Result<BookmarkResponse, AppError> {
    validate_in_order(request, BookmarkRequest::FIELDS)?;
    let recipe_id = parse_object_id(&request.recipe_id)?;

    let user = resolve_user(store, &request.token).await?;

    let saved = store
        .insert_bookmark(Bookmark::new(user.id, recipe_id))
        .await?;

    Ok(saved.into())
}

/// GET /{token} - Favoritos do usuário, na ordem natural da coleção
pub async fn list_bookmarks(
    store: &dyn BookmarkStore,
    path: &TokenPath,
) -> Result<Vec<BookmarkResponse>, AppError> {
    validate_in_order(path, TokenPath::FIELDS)?;

    let user = resolve_user(store, &path.token).await?;

    let bookmarks = store.find_bookmarks_by_user(&user.id).await?;
    Ok(bookmarks.into_iter().map(BookmarkResponse::from).collect())
}

/// GET /infos/{token} - Favoritos com os dados da receita
///
/// Busca as receitas referenciadas em uma única consulta e faz o join em
/// memória. Favoritos cuja receita não existe mais são omitidos.
pub async fn list_bookmark_details(
    store: &dyn BookmarkStore,
    path: &TokenPath,
) -> Result<Vec<BookmarkDetails>, AppError> {
    validate_in_order(path, TokenPath::FIELDS)?;

    let user = resolve_user(store, &path.token).await?;

    let bookmarks = store.find_bookmarks_by_user(&user.id).await?;
    if bookmarks.is_empty() {
        return Ok(Vec::new());
    }

    let recipe_ids: Vec<ObjectId> = bookmarks
        .iter()
        .map(|b| b.id_recipe)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();

    let recipes: HashMap<ObjectId, Recipe> = store
        .find_recipes_by_ids(&recipe_ids)
        .await?
        .into_iter()
        .map(|r| (r.id, r))
        .collect();

    Ok(join_recipes(&bookmarks, &recipes))
}

fn join_recipes(bookmarks: &[Bookmark], recipes: &HashMap<ObjectId, Recipe>) -> Vec<BookmarkDetails> {
    bookmarks
        .iter()
        .filter_map(|bookmark| match recipes.get(&bookmark.id_recipe) {
            Some(recipe) => Some(BookmarkDetails::from_parts(bookmark, recipe)),
            None => {
                log::warn!(
                    "⚠️ Bookmark {:?} references missing recipe {}, skipping",
                    bookmark.id,
                    bookmark.id_recipe
                );
                None
            }
        })
        .collect()
}

/// DELETE / - Remove no máximo um favorito (usuário, receita).
/// Nenhum match não é erro; retorna quantos foram removidos.
pub async fn remove_bookmark(
    store: &dyn BookmarkStore,
    request: &BookmarkRequest,
) -> Result<u64, AppError> {
    validate_in_order(request, BookmarkRequest::FIELDS)?;
    let recipe_id = parse_object_id(&request.recipe_id)?;

    let user = resolve_user(store, &request.token).await?;

    store.delete_bookmark(&user.id, &recipe_id).await
}
